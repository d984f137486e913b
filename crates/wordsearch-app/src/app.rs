use std::io::{self, BufRead, Write};

use wordsearch_game::{Game, GameError, SelectionOutcome};

use crate::{
    action::{self, Action},
    cli::Config,
    render,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal session: one [`Game`] plus the configuration used to replace it.
#[derive(Debug)]
pub struct WordsearchApp {
    config: Config,
    game: Game,
}

impl WordsearchApp {
    pub fn new(config: Config) -> Result<Self, GameError> {
        let game = config
            .factory
            .create(config.size, &config.words, config.seed)?;
        log::info!(
            "starting {0}x{0} puzzle with {1} words (seed {2}, font size {3})",
            config.size,
            config.words.len(),
            game.puzzle().seed,
            config.font_size
        );
        Ok(Self { config, game })
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        write!(output, "{}", render::render_board(&self.game.view()))?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = match line.parse::<Action>() {
                Ok(action) => self.handle(action, &mut output)?,
                Err(err) => {
                    writeln!(output, "error: {err}")?;
                    Flow::Continue
                }
            };
            if flow.is_quit() {
                break;
            }
        }
        output.flush()
    }

    pub fn handle<W>(&mut self, action: Action, output: &mut W) -> io::Result<Flow>
    where
        W: Write,
    {
        log::debug!("handling {action:?}");
        match action {
            Action::Press(cell) => self.game.press(cell),
            Action::Hover(cell) => {
                self.game.hover(cell);
            }
            Action::Release(cell) => {
                let outcome = self.game.release(cell);
                self.report(&outcome, output)?;
            }
            Action::Select { start, end } => {
                let outcome = self.game.select(start, end);
                self.report(&outcome, output)?;
            }
            Action::Cancel => self.game.cancel(),
            Action::NewPuzzle => {
                if let Err(err) = self.new_puzzle() {
                    writeln!(output, "error: {err}")?;
                } else {
                    writeln!(output, "New puzzle (seed {}).", self.game.puzzle().seed)?;
                }
            }
            Action::Show => {}
            Action::Words => write!(output, "{}", render::render_words(&self.game.view()))?,
            Action::Help => {
                writeln!(output, "{}", action::HELP)?;
                return Ok(Flow::Continue);
            }
            Action::Quit => return Ok(Flow::Quit),
        }
        write!(output, "{}", render::render_board(&self.game.view()))?;
        Ok(Flow::Continue)
    }

    fn report<W>(&self, outcome: &SelectionOutcome, output: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(output, "{}", render::render_outcome(outcome, self.game.grid()))
    }

    fn new_puzzle(&mut self) -> Result<(), GameError> {
        // Seeded sessions stay reproducible across new puzzles.
        let seed = self
            .config
            .seed
            .map(|_| self.game.puzzle().seed.next());
        let puzzle = self
            .config
            .factory
            .puzzle(self.config.size, &self.config.words, seed)?;
        self.game.new_puzzle(puzzle);
        Ok(())
    }
}
