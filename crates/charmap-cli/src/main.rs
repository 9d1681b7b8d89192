mod cli;
mod generate_cmd;
mod inspect_cmd;
mod list_cmd;
mod logging;
mod shared;

use charmap::EmitOptions;
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        cli::Commands::Generate {
            ref manifest,
            ref root,
            ref output,
            ref charmap_type,
            ref enc_type,
            ref list_name,
            no_header,
        } => generate_cmd::run(generate_cmd::GenerateArgs {
            manifest: manifest.as_deref(),
            root: root.as_deref(),
            output: output.as_deref(),
            emit: EmitOptions {
                charmap_type: charmap_type.clone(),
                enc_type: enc_type.clone(),
                list_name: list_name.clone(),
                header: !no_header,
            },
        }),
        cli::Commands::Inspect {
            ref locator,
            ref root,
            ref name,
            replacement,
            format,
        } => inspect_cmd::run(locator, root, name.as_deref(), replacement, format),
        cli::Commands::List {
            ref manifest,
            format,
        } => list_cmd::run(manifest.as_deref(), format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
