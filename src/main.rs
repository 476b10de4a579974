use animal_quiz::quiz::{max_score, POINTS_PER_CORRECT};
use animal_quiz::{
    achievements, default_catalog, handle_quiz_action, load_catalog, logger, Animal, GameStats,
    QuizAction, QuizConfig, QuizPhase, QuizSession,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const USAGE: &str = "usage: animal-quiz [--json] [CATALOG.csv]";

struct Args {
    help: bool,
    json: bool,
    catalog_path: Option<PathBuf>,
}

fn parse_args<I>(raw: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args {
        help: false,
        json: false,
        catalog_path: None,
    };

    for arg in raw {
        match arg.as_str() {
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option: {}", flag)),
            path => args.catalog_path = Some(PathBuf::from(path)),
        }
    }

    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = QuizConfig::from_env();
    if args.catalog_path.is_some() {
        config.catalog_path = args.catalog_path;
    }

    let animals: Vec<Animal> = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => default_catalog()?,
    };

    let mut rng = rand::thread_rng();
    let mut session = QuizSession::start(&mut rng, &animals, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.questions)?);
        return Ok(());
    }

    let mut stats = GameStats::default();
    play(&mut session, &mut stats)?;

    println!();
    println!(
        "Final score: {} / {}",
        session.score,
        max_score(session.questions.len())
    );
    println!("{}", session.feedback());
    println!();
    for achievement in achievements(&stats, animals.len()) {
        let mark = if achievement.completed { "x" } else { " " };
        println!(
            "[{}] {} - {} ({:.0}%)",
            mark,
            achievement.title,
            achievement.description,
            achievement.progress * 100.0
        );
    }

    Ok(())
}

fn play(session: &mut QuizSession, stats: &mut GameStats) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while let Some(question) = session.current_question().cloned() {
        if session.phase == QuizPhase::Complete {
            break;
        }

        println!();
        println!(
            "Question {} of {}",
            session.current_index + 1,
            session.questions.len()
        );
        println!("{}", question.question_text);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let choice = loop {
            print!("> ");
            stdout.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    break question.options[n - 1].clone();
                }
                _ => println!("Pick a number from 1 to {}", question.options.len()),
            }
        };

        handle_quiz_action(session, QuizAction::SelectAnswer(choice), stats);
        if session.is_correct == Some(true) {
            println!("Correct! +{}", POINTS_PER_CORRECT);
        } else {
            println!("Not quite. The answer was {}.", question.correct_answer);
        }

        handle_quiz_action(session, QuizAction::Next, stats);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[&str]) -> Result<Args, String> {
        parse_args(raw.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_help_is_not_an_error() {
        for flag in ["-h", "--help"] {
            let args = parse(&[flag]).unwrap();
            assert!(args.help);
        }
    }

    #[test]
    fn test_json_flag_and_catalog_path() {
        let args = parse(&["--json", "zoo.csv"]).unwrap();
        assert!(args.json);
        assert!(!args.help);
        assert_eq!(args.catalog_path, Some(PathBuf::from("zoo.csv")));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        match parse(&["--verbose"]) {
            Err(message) => assert_eq!(message, "unknown option: --verbose"),
            Ok(_) => panic!("--verbose should be rejected"),
        }
    }
}
