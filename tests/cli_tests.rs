use clap::Parser;
use diff_hide::cli::{Cli, Commands};
use std::path::PathBuf;

/// 验证 enc 子命令的参数解析
#[test]
fn test_parse_enc() {
    let cli = Cli::try_parse_from(["diff_hide", "enc", "origin.png", "secret.bin", "out.png"])
        .expect("Parsing should succeed.");

    match cli.command {
        Commands::Enc(args) => {
            assert_eq!(args.origin, PathBuf::from("origin.png"));
            assert_eq!(args.data, PathBuf::from("secret.bin"));
            assert_eq!(args.output, PathBuf::from("out.png"));
            assert!(!args.force);
        }
        _ => panic!("Expected the enc subcommand."),
    }
}

/// 验证 dec 子命令的参数解析，包括 --force 标志
#[test]
fn test_parse_dec_with_force() {
    let cli = Cli::try_parse_from([
        "diff_hide",
        "dec",
        "origin.png",
        "modified.png",
        "out.bin",
        "--force",
    ])
    .expect("Parsing should succeed.");

    match cli.command {
        Commands::Dec(args) => {
            assert_eq!(args.origin, PathBuf::from("origin.png"));
            assert_eq!(args.modified, PathBuf::from("modified.png"));
            assert_eq!(args.output, PathBuf::from("out.bin"));
            assert!(args.force);
        }
        _ => panic!("Expected the dec subcommand."),
    }
}

/// 验证 debug 子命令的参数解析
#[test]
fn test_parse_debug() {
    let cli =
        Cli::try_parse_from(["diff_hide", "debug", "origin.png"]).expect("Parsing should succeed.");

    match cli.command {
        Commands::Debug(args) => {
            assert_eq!(args.origin, PathBuf::from("origin.png"));
        }
        _ => panic!("Expected the debug subcommand."),
    }
}

/// 验证参数数量不对或子命令未知时解析失败
#[test]
fn test_parse_rejects_malformed_invocations() {
    // 缺少输出路径
    assert!(Cli::try_parse_from(["diff_hide", "enc", "origin.png", "secret.bin"]).is_err());

    // 多余的参数
    assert!(Cli::try_parse_from(["diff_hide", "debug", "origin.png", "extra"]).is_err());

    // 未知子命令
    assert!(Cli::try_parse_from(["diff_hide", "steal", "origin.png"]).is_err());

    // 缺少子命令
    assert!(Cli::try_parse_from(["diff_hide"]).is_err());
}
