use inductor::{InductanceEngine, InductanceUnit, RawInputs, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Unit selections come from INDUCTOR_*_UNIT in the environment or a
    // .env file; unset keys fall back to nF / pH / µS.
    let settings = Settings::from_env()?;
    let mut engine = InductanceEngine::new();
    println!("{}\n", engine.status());

    // ── 10 nF, one cycle in 1 µS ────────────────────────────────────
    let raw = RawInputs::new("10", "0", "1", "1");
    let l = engine.calculate(&raw, &settings.units)?;
    println!("L = {:.1} pH", l.picohenries());

    let mut display = engine.display()?;
    println!("{display}");

    // ── The same result in every enabled unit ───────────────────────
    for reading in &display.enabled {
        println!("  {reading}");
    }

    // ── Switch the display unit without recomputing ─────────────────
    display.select(InductanceUnit::Nanohenry)?;
    println!("\n{}", display.text());

    // ── A typo is reported against its field ────────────────────────
    let bad = RawInputs::new("abc", "0", "1", "1");
    if let Err(e) = engine.calculate(&bad, &settings.units) {
        println!("\n{}", e.status_line());
    }
    println!("{}", engine.status());
    Ok(())
}
