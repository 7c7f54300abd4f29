use clap::builder::PossibleValue;
use clap::{crate_name, crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about("Mutating admission webhook that fills in missing resource defaults")
        .args(vec![
            Arg::new("log-level")
                .long("log-level")
                .value_name("LOG_LEVEL")
                .env("DEFAULTS_WEBHOOK_LOG_LEVEL")
                .default_value("info")
                .value_parser([
                    PossibleValue::new("trace"),
                    PossibleValue::new("debug"),
                    PossibleValue::new("info"),
                    PossibleValue::new("warn"),
                    PossibleValue::new("error"),
                ])
                .help("Log level"),
            Arg::new("log-fmt")
                .long("log-fmt")
                .value_name("LOG_FMT")
                .env("DEFAULTS_WEBHOOK_LOG_FMT")
                .default_value("text")
                .value_parser([PossibleValue::new("text"), PossibleValue::new("json")])
                .help("Log output format"),
            Arg::new("log-no-color")
                .long("log-no-color")
                .env("NO_COLOR")
                .action(ArgAction::SetTrue)
                .help("Disable colored output for logs"),
            Arg::new("address")
                .long("addr")
                .value_name("BIND_ADDRESS")
                .default_value("0.0.0.0")
                .env("DEFAULTS_WEBHOOK_BIND_ADDRESS")
                .help("Bind against ADDRESS"),
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .default_value("8443")
                .env("DEFAULTS_WEBHOOK_PORT")
                .help("Listen on PORT"),
            Arg::new("cert-file")
                .long("cert-file")
                .value_name("CERT_FILE")
                .default_value("")
                .env("DEFAULTS_WEBHOOK_CERT_FILE")
                .help("Path to an X.509 certificate file for HTTPS"),
            Arg::new("key-file")
                .long("key-file")
                .value_name("KEY_FILE")
                .default_value("")
                .env("DEFAULTS_WEBHOOK_KEY_FILE")
                .help("Path to an X.509 private key file for HTTPS"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
