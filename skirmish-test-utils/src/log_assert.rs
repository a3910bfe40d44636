use skirmish::BattleView;

/// Asserts that the events of the most recent turn render to the given lines.
#[track_caller]
pub fn assert_turn_logs_eq<B>(battle: &B, want: &[&str])
where
    B: BattleView + ?Sized,
{
    let got = battle.log().lines().collect::<Vec<_>>();
    let want = want.iter().map(|line| line.to_string()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
