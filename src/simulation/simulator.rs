use super::batch::Batch;
use super::session::Session;
use crate::Error;
use crate::game::Game;
use crate::players::Bankroll;
use crate::players::Player;

/// Runs sessions of one strategy to sample how its bankroll behaves.
///
/// A session resets the player to the configured [`Bankroll`] and plays
/// rounds for as long as the player is willing and able. A bet refused by
/// the table limit ends that session early, keeping the stakes recorded so
/// far; every other error is fatal to the batch.
#[derive(Debug, Clone)]
pub struct Simulator<P> {
    game: Game,
    player: P,
    bankroll: Bankroll,
    sessions: usize,
    seed: u64,
}

impl<P> Simulator<P>
where
    P: Player,
{
    pub fn new(
        game: Game,
        player: P,
        bankroll: Bankroll,
        sessions: usize,
        seed: u64,
    ) -> Result<Self, Error> {
        if sessions == 0 {
            return Err(Error::InvalidConfig("sessions must be positive".to_string()));
        }
        Ok(Self {
            game,
            player,
            bankroll,
            sessions,
            seed,
        })
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One session on the shared wheel stream.
    pub fn session(&mut self) -> Result<Session, Error> {
        Self::play(&mut self.game, &mut self.player, self.bankroll)
    }

    /// Every session back to back, each continuing the wheel's stream.
    pub fn gather(&mut self) -> Result<Batch, Error> {
        let batch = (0..self.sessions)
            .map(|_| self.session())
            .collect::<Result<Batch, Error>>()?;
        log::info!(
            "{:<32}{:<16}{}",
            "gathered sessions",
            batch.len(),
            batch.summary().duration
        );
        Ok(batch)
    }

    fn play(game: &mut Game, player: &mut P, bankroll: Bankroll) -> Result<Session, Error> {
        player.reset(bankroll);
        let mut session = Session::new(bankroll.stake());
        while player.playing() {
            match game.cycle(player) {
                Ok(_) => session.record(player.stake()),
                Err(e @ Error::LimitExceeded { .. }) => {
                    log::warn!("{:<32}{}", "session cut short", e);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        log::debug!(
            "{:<32}{:<16}{:<16}{}",
            "session over",
            session.duration(),
            session.peak(),
            session.last()
        );
        Ok(session)
    }
}

#[cfg(feature = "parallel")]
impl<P> Simulator<P>
where
    P: Player + Clone + Send + Sync,
{
    /// Every session concurrently, each on its own clone of the wheel and
    /// player. Session `i` reseeds both from `seed + i`, so the batch does
    /// not depend on how rayon schedules the work.
    pub fn par_gather(&self) -> Result<Batch, Error> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let sessions = (0..self.sessions)
            .into_par_iter()
            .map(|i| {
                let seed = self.seed.wrapping_add(i as u64);
                let mut game = self.game.clone();
                let mut player = self.player.clone();
                game.wheel_mut().reseed(seed);
                player.reseed(seed.rotate_left(32));
                Self::play(&mut game, &mut player, self.bankroll)
            })
            .collect::<Result<Vec<Session>, Error>>()?;
        let batch = sessions.into_iter().collect::<Batch>();
        log::info!(
            "{:<32}{:<16}{}",
            "gathered sessions in parallel",
            batch.len(),
            batch.summary().duration
        );
        Ok(batch)
    }
}
