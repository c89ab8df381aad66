use super::round::Round;
use crate::Error;
use crate::players::Player;
use crate::table::Table;
use crate::wheel::Wheel;

/// Plays rounds of roulette between one wheel, one table, and a player.
///
/// Each call to [`Game::cycle`] runs the whole round in order:
/// clear the felt, let the player bet, spin, settle every bet against the
/// winning bin, show the bin to the player, and consume one round of the
/// player's budget. A bet rejected by the table surfaces as an error before
/// the wheel is spun.
#[derive(Debug, Clone)]
pub struct Game {
    wheel: Wheel,
    table: Table,
}

impl Game {
    pub fn new(wheel: Wheel, table: Table) -> Self {
        Self { wheel, table }
    }
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }
    pub fn wheel_mut(&mut self) -> &mut Wheel {
        &mut self.wheel
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn cycle<P>(&mut self, player: &mut P) -> Result<Round, Error>
    where
        P: Player + ?Sized,
    {
        self.table.clear();
        player.place_bets(&mut self.table)?;
        let pocket = self.wheel.spin();
        let bin = self.wheel.bin(pocket);
        let mut round = Round::new(pocket);
        for bet in self.table.bets() {
            match bet.wins(bin) {
                true => {
                    player.win(bet);
                    round.won(bet.clone());
                }
                false => {
                    player.lose(bet);
                    round.lost(bet.clone());
                }
            }
        }
        player.winners(bin);
        player.tick();
        log::trace!("{:<32}{:<16}{}", "round", round, player.stake());
        Ok(round)
    }
}
