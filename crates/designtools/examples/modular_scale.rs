//! Derives a modular size scale and a wrapped hue wheel.
//!
//! Run with: `cargo run --example modular_scale`

use designtools::prelude::*;

fn main() -> Result<(), DesignToolsError> {
    // A minor-third ladder around a 16px base, three steps each way.
    let ladder = ratio_sequence(Number::from(16.0), Number::from(1.2), 3)?;
    let sizes = round_sequence(&ladder, Some(2));

    println!("size scale:");
    for size in &sizes {
        println!("  {size}px");
    }

    // Hue angles spun past a full circle wrap back onto the wheel.
    let angles = [
        Number::from(30),
        Number::from(150),
        Number::from(270),
        Number::from(390),
        Number::from(510),
    ];
    let wheel = fmod_sequence(&angles, Number::from(360))?;

    println!("hue wheel:");
    let warm = Range::new(0.0, 90.0)?;
    for angle in &wheel {
        let label = if warm.contains(angle.as_f64()) {
            "warm"
        } else {
            "cool"
        };
        println!("  {angle}° ({label})");
    }

    // An accent color picked off the wheel.
    let accent = hsv_color(0.58, 0.65, 0.95)?;
    let rgb = accent.to_rgb();
    println!(
        "accent: rgb({:.3}, {:.3}, {:.3})",
        rgb.red(),
        rgb.green(),
        rgb.blue()
    );

    Ok(())
}
