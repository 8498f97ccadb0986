use sk_mechanics::DiceExpr;

pub fn run(exprs: &[String], seed: Option<u64>) -> Result<(), String> {
    let dice = exprs
        .iter()
        .map(|e| e.parse::<DiceExpr>().map_err(|err| err.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let (mut rng, _) = super::seeded_rng(seed);
    for expr in dice {
        println!("{expr}: {}", expr.roll(&mut rng));
    }
    Ok(())
}
