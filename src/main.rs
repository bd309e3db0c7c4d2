use clap_v3::{App, load_yaml};

fn main() {
    pretty_env_logger::init();

    let cli_cnf = load_yaml!("cli.yml");
    let args = App::from(cli_cnf).get_matches();

    match args.subcommand() {
        ("process", Some(sub_args)) => homonym_toolkit::process::main(sub_args),
        ("expand", Some(sub_args)) => homonym_toolkit::expand::main(sub_args),
        _ => {
            println!("Invalid Subcommand: ./homonym-toolkit --help for valid options");
            std::process::exit(1);
        },
    }
}
