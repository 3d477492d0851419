use inductor::{
    compute_from_parts, CapacitanceUnit, DisplayState, InductanceUnit, TimeUnit,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Same coil, different tank capacitors ────────────────────────
    // A 2.53 µH coil rings at 1 MHz with 10 nF; the counted period
    // scales with √C.
    println!("C        period      L");
    for (c, unit, period_us) in [
        (1.0, CapacitanceUnit::Nanofarad, 0.316_23),
        (10.0, CapacitanceUnit::Nanofarad, 1.0),
        (100.0, CapacitanceUnit::Nanofarad, 3.162_3),
        (1.0, CapacitanceUnit::Microfarad, 10.0),
    ] {
        let l = compute_from_parts(
            c, unit,
            1.0, period_us, TimeUnit::Microsecond,
            0.0, InductanceUnit::Picohenry,
        )?;
        let state = DisplayState::derive(l);
        println!("{c:>5} {unit:<3} {period_us:>7.3} µS  {}", state.reading());
    }

    // ── Fixture correction ──────────────────────────────────────────
    for parasitic_nh in [0.0, 50.0, 500.0, 3000.0] {
        let l = compute_from_parts(
            10.0, CapacitanceUnit::Nanofarad,
            1.0, 1.0, TimeUnit::Microsecond,
            parasitic_nh, InductanceUnit::Nanohenry,
        )?;
        println!("Lp = {parasitic_nh:>6} nH → {}", DisplayState::derive(l));
    }

    Ok(())
}
