mod options;

use std::process::exit;

use itertools::Itertools;
pub use options::QTPServerOptions;

use crate::prelude::*;

pub struct QTPServer {
    agent: Tallied,
    board: Option<Board>,
    past_boards: Vec<Board>,
    #[allow(dead_code)]
    config: QTPServerOptions,
}

impl QTPServer {
    /// Produces a new QTP server with the given bot configuration.
    pub fn new(options: QTPServerOptions) -> QTPServer {
        QTPServer {
            agent: Tallied::around(options.agent_config().get_agent()),
            board: None,
            past_boards: vec![],
            config: options,
        }
    }

    /// Runs the engine loop until a quit arrives or stdin closes.
    pub fn run(&mut self) -> Result<()> {
        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0 {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let Some((&cmd, rest)) = args.split_first() else {
                continue;
            };

            self.apply(cmd, rest)?;
        }
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "bestmove" => self.best_move(),
            | "impact" => self.impact(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "placings" => self.placings(),
            | "play" => self.play_move(args),
            | "pretty" => self.show(),
            | "quit" => exit(0),
            | "route" => self.route(args),
            | "score" => self.score(),
            | "stats" => self.stats(),
            | "undo" => self.undo_move(),
            | "validmoves" => self.valid_moves(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    /// Asks the configured bot for this turn's action. The action is reported
    /// rather than played; the caller follows up with a play command.
    fn best_move(&mut self) -> Result<()> {
        let board = self.ensure_started()?.clone();
        if board.winner().is_some() {
            return Err(anyhow!("the game is already decided"));
        }

        let action = self.agent.choose(&board);
        println!("{}", action.notate());
        Ok(())
    }

    /// Scores a candidate fence against the current routes.
    fn impact(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        let Some(arg) = args.first() else {
            return Err(anyhow!("no fence provided"));
        };
        let MoveString { repr: _, action } = arg.parse::<MoveString>()?;
        let Action::Fence(placing) = action else {
            return Err(anyhow!("{arg} is a pawn move, not a fence"));
        };

        match self.get().fence_impact(placing) {
            Some(impact) => println!("{}", impact.notate()),
            None         => println!("blocking")
        };
        Ok(())
    }

    /// Starts a new game, potentially from an advanced position (i.e. with a
    /// move history).
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let gamestr = args.join(" ").parse::<GameString>()?;

        self.board = Some(Board::new());
        self.past_boards = vec![];
        for mv in gamestr.moves {
            self.past_boards.push(self.get().clone());
            self.get_mut().play(mv.action)?;
        }

        println!("{}", self.get().notate());
        Ok(())
    }

    /// Prints the geometrically available fence placings.
    fn placings(&mut self) -> Result<()> {
        let board = self.ensure_started()?;
        let placings = board.valid_fence_placings();
        let repr = placings.iter().map(|id| FencePlacing::from_id(id).notate()).join("; ");

        println!("{}", placings.len());
        println!("{}", repr);
        Ok(())
    }

    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        let Some(arg) = args.first() else {
            return Err(anyhow!("no move provided"));
        };

        let MoveString { repr: _, action } = arg.parse::<MoveString>()?;
        let snapshot = self.get().clone();
        self.get_mut().play(action)?;
        self.past_boards.push(snapshot);

        println!("{}", self.get().notate());
        if let Some(winner) = self.get().winner() {
            println!("winner {}", winner.notate());
        }
        Ok(())
    }

    /// Prints the shortest route for the player to move, by the requested
    /// search (astar when unspecified).
    fn route(&mut self, args: &[&str]) -> Result<()> {
        let board = self.ensure_started()?;
        let search = match args.first() {
            Some(&name) => name.parse::<Search>()?,
            None        => Search::AStar
        };

        match board.route_for(board.player_to_move(), search) {
            Some(route) => {
                println!("{}", route.len());
                println!("{}", route.notate());
            },
            None => println!("no route")
        };
        Ok(())
    }

    /// Prints each player's shortest route length.
    fn score(&mut self) -> Result<()> {
        let board = self.ensure_started()?;
        let repr = Player::all()
            .iter()
            .map(|&player| {
                let length = board
                    .route_for(player, Search::AStar)
                    .map_or("none".into(), |route| route.len().to_string());
                format!("{} {}", player.notate(), length)
            })
            .join("; ");

        println!("{}", repr);
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let board = self.ensure_started()?;
        println!("{}", board.pretty());
        Ok(())
    }

    /// Prints the running action counts for the configured bot.
    fn stats(&mut self) -> Result<()> {
        println!("{}", self.agent.tally().report());
        Ok(())
    }

    fn undo_move(&mut self) -> Result<()> {
        self.ensure_started()?;

        let Some(previous) = self.past_boards.pop() else {
            return Err(anyhow!("no move to undo"));
        };
        self.board = Some(previous);

        println!("{}", self.get().notate());
        Ok(())
    }

    fn valid_moves(&mut self) -> Result<()> {
        let board = self.ensure_started()?;
        let moves = board.valid_pawn_moves(board.player_to_move());
        let repr = moves.iter().map(|coord| coord.notate()).join("; ");

        println!("{}", moves.len());
        println!("{}", repr);
        Ok(())
    }

    // accessors

    fn ensure_started(&mut self) -> Result<&mut Board> {
        if self.board.is_none() {
            Err(anyhow!("no game in progress"))
        } else {
            Ok(self.get_mut())
        }
    }

    /// Retrieves the board in a shared context.
    fn get(&self) -> &Board {
        self.board.as_ref().unwrap()
    }

    /// Retrieves the board in a mutable context.
    fn get_mut(&mut self) -> &mut Board {
        self.board.as_mut().unwrap()
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        Ok(())
    }

    /// Prints an error to the QTP stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the ok footer to the QTP stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }
}
