use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_repair_flags_parse() {
    let cli = Cli::parse_from([
        "mm",
        "repair",
        "--max-attempts",
        "5",
        "--report",
        "out.json",
        "-p",
        "/tmp/project",
    ]);
    assert_eq!(cli.global.project_dir, "/tmp/project");
    match cli.command {
        Commands::Repair(args) => {
            assert_eq!(args.max_attempts, Some(5));
            assert_eq!(args.report.as_deref(), Some("out.json"));
        }
        other => panic!("expected repair, got {other:?}"),
    }
}

#[test]
fn test_fake_takes_positional_app_and_name() {
    let cli = Cli::parse_from(["mm", "fake", "shop", "0003_create_order"]);
    match cli.command {
        Commands::Fake(args) => {
            assert_eq!(args.app, "shop");
            assert_eq!(args.name, "0003_create_order");
        }
        other => panic!("expected fake, got {other:?}"),
    }
}
