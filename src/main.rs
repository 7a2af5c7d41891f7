use clap::{Parser, Subcommand};
use std::io;
use std::process;
use warden::constants::PREFIX_ENV_VAR;
use warden::{
    chown_root, install, is_process_running, print_version, read_pid_file, resolve_prefix,
    uninstall, BuildInfo, Layout,
};

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "A CLI tool for managing the warden service environment")]
struct Cli {
    /// Installation prefix under which all managed paths are rooted
    #[arg(short, long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version
    Version,
    /// Print the warden environment
    Env,
    /// Install warden into the prefix-rooted directories
    Install,
    /// Uninstall warden
    Uninstall {
        /// A package manager is performing the uninstallation
        #[arg(long)]
        package: bool,
    },
    /// Report whether a daemon instance is currently running
    Status,
}

fn main() {
    let cli = Cli::parse();

    let prefix = match resolve_prefix(cli.prefix.clone()) {
        Ok(prefix) => prefix,
        Err(e) => {
            eprintln!("Error resolving installation prefix: {}", e);
            process::exit(1);
        }
    };
    let layout = Layout::with_prefix(prefix);

    match &cli.command {
        Commands::Version => {
            let info = BuildInfo::from_build_env();
            if let Err(e) = print_version(&info, &mut io::stdout()) {
                eprintln!("Error printing version: {}", e);
                process::exit(1);
            }
        }
        Commands::Env => print_env(&layout),
        Commands::Install => match install(&layout).and_then(|()| chown_root(&layout)) {
            Ok(()) => println!("Successfully installed warden"),
            Err(e) => {
                eprintln!("Error installing warden: {}", e);
                process::exit(1);
            }
        },
        Commands::Uninstall { package } => match uninstall(&layout, *package) {
            Ok(()) => println!("Successfully uninstalled warden"),
            Err(e) => {
                eprintln!("Error uninstalling warden: {}", e);
                process::exit(1);
            }
        },
        Commands::Status => match read_pid_file(&layout) {
            Ok(pid) => {
                if is_process_running(pid) {
                    println!("warden is running (pid {})", pid);
                } else {
                    println!("warden is not running (stale pid file, pid {})", pid);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!("warden is not running");
            }
            Err(e) => {
                eprintln!("Error reading pid file: {}", e);
                process::exit(1);
            }
        },
    }
}

fn print_env(layout: &Layout) {
    println!("{}={}", PREFIX_ENV_VAR, layout.prefix());
    println!("WARDEN_ETC_DIR={}", layout.etc_dir_path().display());
    println!("WARDEN_RUN_DIR={}", layout.run_dir_path().display());
    println!("WARDEN_LOG_DIR={}", layout.log_dir_path().display());
    println!("WARDEN_LIB_DIR={}", layout.lib_dir_path().display());
    println!("WARDEN_BIN_DIR={}", layout.bin_dir_path().display());
    println!("WARDEN_PID_FILE={}", layout.pid_file_path().display());
}
