use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use forja::{
    api::{self, InstallChoice, ScaffoldOptions},
    prompt::InquirePrompt,
    selection::{
        ApiStyle, AuthMethod, Database, Language, ProjectType, Selection, StateManagement, Styling,
    },
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("new")
                .about("Scaffolds a project into a destination directory")
                .arg(
                    Arg::new("destination")
                        .help("The destination directory where the project will be created")
                        .required(true),
                )
                .arg(
                    Arg::new("preset")
                        .help("TOML file with pre-resolved answers, skips the option prompts")
                        .long("preset")
                        .short('p'),
                )
                .arg(
                    Arg::new("yes")
                        .help("Apply the plan without asking for confirmation")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("install")
                        .help("Install dependencies after scaffolding without asking")
                        .long("install")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("skip-install"),
                )
                .arg(
                    Arg::new("skip-install")
                        .help("Never install dependencies")
                        .long("skip-install")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list").about("Lists every option category and its choices"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("new", args)) => handle_new(args)?,
        Some(("list", _)) => handle_list(),
        _ => unreachable!(),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

fn handle_new(args: &ArgMatches) -> miette::Result<()> {
    let destination = args
        .get_one::<String>("destination")
        .expect("destination required");

    let options = ScaffoldOptions {
        assume_yes: args.get_flag("yes"),
        install: if args.get_flag("install") {
            InstallChoice::Always
        } else if args.get_flag("skip-install") {
            InstallChoice::Never
        } else {
            InstallChoice::Prompt
        },
    };

    let mut prompt = InquirePrompt;

    match args.get_one::<String>("preset") {
        Some(preset) => {
            let selection = Selection::from_file(preset).map_err(api::ScaffoldError::from)?;

            api::scaffold_with(&selection, &mut prompt, destination, &options)?;
        }
        None => {
            api::scaffold(&mut prompt, destination, &options)?;
        }
    }

    Ok(())
}

fn handle_list() {
    print_category("Project type", ProjectType::ALL.iter().map(|v| v.label()));
    print_category("Language", Language::ALL.iter().map(|v| v.label()));
    print_category(
        "State management",
        StateManagement::ALL.iter().map(|v| v.label()),
    );
    print_category("Authentication", AuthMethod::ALL.iter().map(|v| v.label()));
    print_category("Styling", Styling::ALL.iter().map(|v| v.label()));
    print_category("API type", ApiStyle::ALL.iter().map(|v| v.label()));
    print_category("Database", Database::ALL.iter().map(|v| v.label()));
}

fn print_category<'a>(name: &str, choices: impl Iterator<Item = &'a str>) {
    let joined = choices.collect::<Vec<_>>().join(", ");

    println!("{}: {}", name.bold().blue(), joined);
}
