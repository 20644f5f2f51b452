use clap::Parser;

use hull_resistance_calculator::{app, config, i18n};

/// Calculadora de resistência ao avanço de cascos (Holtrop & Mennen 1984).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Idioma da interface: auto, pt-br ou en-us.
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
}

/// Ponto de entrada: carrega a configuração, resolve o idioma e executa o CLI.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Erro: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
