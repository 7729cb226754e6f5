use windows::core::HSTRING;
use windows::Media::SpeechSynthesis::{SpeechSynthesizer, VoiceGender, VoiceInformation};
use windows::Storage::Streams::{Buffer, DataReader, InputStreamOptions};

use crate::{
    Cue, EngineOptions, Gender, Marker, SpeechEngine, SynthesisResult, TimedMetadataTrack,
    TtsError, VoiceInfo,
};

use super::ticks_to_secs;

/// Windows Media (WinRT) text-to-speech engine.
///
/// A fresh `SpeechSynthesizer` is created for every call, so one engine can be
/// shared between threads.
pub struct WindowsMediaEngine {
    binding: &'static str,
}

impl WindowsMediaEngine {
    /// Check that the WinRT speech runtime answers and create the engine.
    pub fn load(binding: &'static str) -> windows::core::Result<Self> {
        SpeechSynthesizer::DefaultVoice()?;
        Ok(Self { binding })
    }
}

/// Find an installed voice whose id, display name or description is `name`.
fn find_voice(name: &str) -> windows::core::Result<Option<VoiceInformation>> {
    if name.is_empty() {
        return Ok(None);
    }

    let name = HSTRING::from(name);
    for voice in SpeechSynthesizer::AllVoices()? {
        if voice.Id()? == name || voice.DisplayName()? == name || voice.Description()? == name {
            return Ok(Some(voice));
        }
    }
    Ok(None)
}

fn voice_to_info(voice: &VoiceInformation) -> windows::core::Result<VoiceInfo> {
    let gender = if voice.Gender()? == VoiceGender::Male {
        Gender::Male
    } else {
        Gender::Female
    };

    Ok(VoiceInfo {
        id: voice.Id()?.to_string_lossy(),
        display_name: voice.DisplayName()?.to_string_lossy(),
        description: voice.Description()?.to_string_lossy(),
        language: voice.Language()?.to_string_lossy(),
        gender,
    })
}

impl SpeechEngine for WindowsMediaEngine {
    fn name(&self) -> &str {
        self.binding
    }

    fn synthesize(
        &self,
        text: &str,
        options: &EngineOptions,
    ) -> Result<SynthesisResult, TtsError> {
        let synth = SpeechSynthesizer::new()?;

        let synth_options = synth.Options()?;
        synth_options.SetSpeakingRate(options.speaking_rate)?;
        synth_options.SetAudioPitch(options.audio_pitch)?;
        synth_options.SetIncludeSentenceBoundaryMetadata(true)?;
        synth_options.SetIncludeWordBoundaryMetadata(true)?;

        // Unknown voice names keep the synthesizer's default voice
        if let Some(voice) = find_voice(&options.voice_name)? {
            synth.SetVoice(&voice)?;
        }

        let text = HSTRING::from(text);
        let operation = if options.enable_ssml {
            synth.SynthesizeSsmlToStreamAsync(&text)?
        } else {
            synth.SynthesizeTextToStreamAsync(&text)?
        };

        if options.enable_trace {
            log::info!("Getting speech stream..");
        }
        let stream = operation.get()?;
        if options.enable_trace {
            log::info!("Succeeded getting speech stream.");
        }

        let stream_size = stream.Size()?;
        let size = u32::try_from(stream_size).map_err(|_| {
            TtsError::Engine(format!("speech stream too large ({stream_size} bytes)"))
        })?;
        let input = stream.GetInputStreamAt(0)?;
        let buffer = Buffer::Create(size)?;
        let filled = input
            .ReadAsync(&buffer, size, InputStreamOptions::None)?
            .get()?;

        let reader = DataReader::FromBuffer(&filled)?;
        let mut audio_data = vec![0u8; filled.Length()? as usize];
        reader.ReadBytes(&mut audio_data)?;

        let mut markers = Vec::new();
        for marker in stream.Markers()? {
            markers.push(Marker {
                marker_type: marker.MediaMarkerType()?.to_string_lossy(),
                text: marker.Text()?.to_string_lossy(),
                time: ticks_to_secs(marker.Time()?.Duration),
            });
        }

        let mut timed_metadata_tracks = Vec::new();
        for track in stream.TimedMetadataTracks()? {
            let mut cues = Vec::new();
            for cue in track.Cues()? {
                cues.push(Cue {
                    id: cue.Id()?.to_string_lossy(),
                    start_time: ticks_to_secs(cue.StartTime()?.Duration),
                    duration: ticks_to_secs(cue.Duration()?.Duration),
                });
            }
            timed_metadata_tracks.push(TimedMetadataTrack {
                id: track.Id()?.to_string_lossy(),
                cues,
            });
        }

        Ok(SynthesisResult {
            audio_content_type: stream.ContentType()?.to_string_lossy(),
            audio_data,
            markers,
            timed_metadata_tracks,
        })
    }

    fn voice_list(&self) -> Result<Vec<VoiceInfo>, TtsError> {
        let mut voices = Vec::new();
        for voice in SpeechSynthesizer::AllVoices()? {
            voices.push(voice_to_info(&voice)?);
        }
        Ok(voices)
    }

    fn voice_info(&self, name: &str) -> Result<Option<VoiceInfo>, TtsError> {
        Ok(find_voice(name)?.as_ref().map(voice_to_info).transpose()?)
    }

    fn default_voice_info(&self) -> Result<VoiceInfo, TtsError> {
        Ok(voice_to_info(&SpeechSynthesizer::DefaultVoice()?)?)
    }
}
