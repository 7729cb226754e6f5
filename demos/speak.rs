use std::path::PathBuf;
use std::time::Instant;

use windows_media_tts::{SynthesisOptions, Synthesizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let synth = Synthesizer::new();
    if !synth.is_available() {
        eprintln!("No speech engine available for {}", synth.platform());
        std::process::exit(1);
    }

    for voice in synth.voice_list()? {
        println!("{} ({}, {:?})", voice.display_name, voice.language, voice.gender);
    }

    let text = "\nHello World! <mark name=\"a\" />How are you <mark name=\"b\" />doing today?\n";

    // An options file can replace the defaults below, e.g. `cargo run --example speak -- options.json`
    let options = match std::env::args().nth(1) {
        Some(path) => SynthesisOptions::from_json_file(&PathBuf::from(path))?,
        None => SynthesisOptions::builder()
            .voice_name("Microsoft David")
            .speaking_rate(1.0)
            .audio_pitch(1.0)
            .enable_ssml(true)
            .build()?,
    };

    let synth_start = Instant::now();
    let result = synth.synthesize(text, Some(options))?;
    println!(
        "Synthesized {} bytes of {} in {:.2?}",
        result.audio_data.len(),
        result.audio_content_type,
        synth_start.elapsed()
    );

    println!("{}", serde_json::to_string_pretty(&result.markers)?);
    println!("{}", serde_json::to_string_pretty(&result.timed_metadata_tracks)?);

    if result.is_wav() {
        let audio = result.decode_wav()?;
        println!(
            "{:.2}s of audio at {}Hz",
            audio.duration_secs(),
            audio.sample_rate
        );
    }

    std::fs::create_dir_all("out")?;
    result.write_audio(&PathBuf::from("out/out.wav"))?;
    println!("Saved to out/out.wav");

    Ok(())
}
