use logtail_core::conf::load_config;
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listening on {}", cfg.server.listen);
            println!(
                "✔ serving {} at {}",
                cfg.tail.path.display(),
                cfg.tail.route
            );
            match &cfg.tail.redact {
                Some(pattern) => println!("✔ redacting matches of {pattern:?}"),
                None => println!("✔ redaction disabled"),
            }
            if !cfg.tail.path.exists() {
                println!("! {} does not exist yet", cfg.tail.path.display());
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
