use pokemon_battle::{
    BattleBot, BattleEngine, BattleRng, MoveRegistry, RandomStrategy, TypeChart,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const HUMAN: usize = 0;
const OPPONENT: usize = 1;

/// Print a 1-indexed menu and read a choice until the input is valid.
fn prompt_menu(options: &[String], input: &mut impl BufRead) -> io::Result<usize> {
    for (i, option) in options.iter().enumerate() {
        println!("({}) {}", i + 1, option);
    }

    loop {
        print!("Please input your choice: ");
        io::stdout().flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(n - 1),
            _ => println!("Please input a valid choice."),
        }
    }
}

fn move_menu(engine: &BattleEngine) -> Vec<String> {
    let active = match engine.active_pokemon(HUMAN) {
        Ok(active) => active,
        Err(_) => return Vec::new(),
    };
    let mut options: Vec<String> = active
        .move_slots()
        .iter()
        .map(|slot| format!("{} PP: {}", slot.name, slot.pp))
        .collect();
    options.push("Back".to_string());
    options
}

fn switch_menu(engine: &BattleEngine) -> Vec<String> {
    let team = engine.team(HUMAN).unwrap_or(&[]);
    let mut options: Vec<String> = team
        .iter()
        .map(|pokemon| {
            if pokemon.is_fainted() {
                format!("{} FAINTED", pokemon.nickname())
            } else {
                format!("{} HP: {}", pokemon.nickname(), pokemon.current_hp())
            }
        })
        .collect();
    options.push("Back".to_string());
    options
}

/// Prompt until the human has a queued action. Returns false on Exit.
fn prompt_turn(engine: &mut BattleEngine, input: &mut impl BufRead) -> io::Result<bool> {
    // A faint leaves no choice: the replacement must come first.
    let forced = engine
        .side(HUMAN)
        .map(|side| side.needs_switch())
        .unwrap_or(false);

    let main_options: Vec<String> = ["Attack", "Switch", "Exit"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    loop {
        let choice = if forced {
            println!("You must send out a replacement!");
            1
        } else {
            prompt_menu(&main_options, input)?
        };

        match choice {
            0 => {
                let options = move_menu(engine);
                let picked = prompt_menu(&options, input)?;
                if picked == options.len() - 1 {
                    continue;
                }
                let move_name = options[picked]
                    .split(" PP: ")
                    .next()
                    .unwrap_or_default()
                    .to_string();
                match engine.queue_move(HUMAN, &move_name) {
                    Ok(()) => return Ok(true),
                    Err(e) => println!("{}", e),
                }
            }
            1 => {
                let options = switch_menu(engine);
                let picked = prompt_menu(&options, input)?;
                if picked == options.len() - 1 {
                    continue;
                }
                match engine.queue_switch(HUMAN, picked) {
                    Ok(()) => return Ok(true),
                    Err(e) => println!("{}", e),
                }
            }
            _ => return Ok(false),
        }
    }
}

fn main() {
    let moves = Arc::new(MoveRegistry::standard());
    let chart = Arc::new(TypeChart::standard());

    let (player_team, opponent_team) = match pokemon_battle::prefab_teams::demo_teams(&moves) {
        Ok(teams) => teams,
        Err(e) => {
            println!("Error building demo teams: {}", e);
            return;
        }
    };

    let mut engine = match BattleEngine::new(
        &player_team,
        &opponent_team,
        moves,
        chart,
        BattleRng::new(),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            println!("Error starting battle: {}", e);
            return;
        }
    };

    let mut bot = BattleBot::new(Box::new(RandomStrategy::new()), OPPONENT);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        if engine.is_finished() {
            break;
        }

        match prompt_turn(&mut engine, &mut input) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                println!("Input error: {}", e);
                break;
            }
        }

        if let Err(e) = bot.queue_turn(&mut engine) {
            println!("Opponent error: {}", e);
            break;
        }

        match engine.play_out_turns() {
            Ok(events) => {
                for line in events.format_log() {
                    println!("{}", line);
                }
                println!();
            }
            Err(e) => {
                println!("Error resolving round: {}", e);
                break;
            }
        }
    }

    println!("Reached end of program.");
}
