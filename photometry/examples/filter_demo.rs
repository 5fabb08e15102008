//! Walk through the built-in filter sets and a few conversions
//!
//! Run with `RUST_LOG=debug` to see registry construction and
//! `RUST_LOG=trace` to see every conversion.

use photometry::catalog::{MIPS1, SDSS_U, SLOAN, SPITZER};
use photometry::{FilterSetManager, FluxScale, Photometry, Quantity, Unit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let fsm = FilterSetManager::new();
    println!("Filter sets: {:?}", fsm.filter_set_names());

    let flux = fsm.magnitude_to_flux(SLOAN, SDSS_U, 10.0, FluxScale::MilliJansky)?;
    println!("{SLOAN} {SDSS_U} 10 mag = {flux} = {}", flux.to(Unit::Jansky)?);

    let mag = fsm.flux_to_magnitude(SLOAN, SDSS_U, 156.85, FluxScale::MilliJansky)?;
    println!("{SLOAN} {SDSS_U} 156.85 mJy = {mag} (should be 10)");

    let q = Quantity::millijansky(1000.0);
    let mag = fsm.flux_to_magnitude(SPITZER, MIPS1, q, FluxScale::default())?;
    println!("{SPITZER} {MIPS1} 1000 mJy = {mag}");

    let flux = fsm.magnitude_to_flux(SLOAN, SDSS_U, 0.0214, FluxScale::MilliJansky)?;
    println!("{SLOAN} {SDSS_U} 0.0214 mag = {flux}");

    let point = Photometry::new(SDSS_U, 12.0, 0.05, true, Some(Unit::Magnitude))?;
    println!(
        "Photometry {}: {} +/- {} ({:.4} mJy +/- {:.4} mJy)",
        point.band(),
        point.magnitude()?,
        point.error_as_magnitude()?,
        point.millijansky_value()?,
        point.millijansky_error()?,
    );

    Ok(())
}
