//! Library integration tests.

use cachectl::CacheControlError;

#[test]
fn error_types_are_public() {
    let err = CacheControlError::UnknownAction {
        id: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cachectl::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use cachectl::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["cachectl", "dirs", "--json"]);

    if let Commands::Dirs(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Dirs command");
    }
}
