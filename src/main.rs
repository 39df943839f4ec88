use clap::{Parser as ClapParser, ValueEnum};
use sorrel::cli::{self, CliError, CoerceType, EvalOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sorrel")]
#[command(about = "Sorrel - evaluate an expression against a JSON object of variables")]
#[command(version)]
struct Cli {
    /// The expression to evaluate
    expression: String,

    /// JSON object of variables (reads from stdin if not provided)
    #[arg(short, long)]
    vars: Option<String>,

    /// Coerce the result to a specific type
    #[arg(long = "as", value_enum)]
    coerce: Option<CoerceArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CoerceArg {
    Int,
    Number,
    String,
    Bool,
}

impl From<CoerceArg> for CoerceType {
    fn from(arg: CoerceArg) -> Self {
        match arg {
            CoerceArg::Int => CoerceType::Int,
            CoerceArg::Number => CoerceType::Number,
            CoerceArg::String => CoerceType::String,
            CoerceArg::Bool => CoerceType::Bool,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let vars = match cli.vars {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = EvalOptions {
        expression: cli.expression,
        vars,
        coerce: cli.coerce.map(Into::into),
    };

    let result = cli::execute_eval(&options)?;
    println!("{}", serde_json::to_string(&result).map_err(CliError::Json)?);
    Ok(())
}
