use next_properties::{Decoder, DecoderOptions, Encoder, MalformedLines, Properties};

/// A simple application configuration.
#[derive(Debug, Properties)]
struct AppConfig {
    #[properties(key = "app.name")]
    app_name: String,
    #[properties(key = "server.port")]
    port: u16,
    #[properties(key = "debug")]
    debug: bool,
    #[properties(key = "server.max_connections")]
    max_connections: u32,
    // Not part of the file format
    started: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "MyApp".to_string(),
            port: 8080,
            debug: false,
            max_connections: 100,
            started: false,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("app.properties");

    std::fs::write(
        &path,
        "# written by hand\napp.name=Demo\nserver.port=9000\n\nthis line is ignored\ndebug=true\n",
    )?;

    // Keep going past lines that are not `key=value`
    let options = DecoderOptions::builder()
        .malformed_lines(MalformedLines::Skip)
        .build()?;

    let mut config = AppConfig::default();
    Decoder::with_options(std::fs::File::open(&path)?, options).decode(&mut config)?;
    config.started = true;

    println!("Loaded: {config:?}");

    config.max_connections = 250;
    Encoder::new(std::fs::File::create(&path)?).encode(&config)?;

    println!("Saved:\n{}", std::fs::read_to_string(&path)?);

    Ok(())
}
