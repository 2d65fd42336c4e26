//! Procedural sound: every effect and the music loop are synthesized at
//! startup as 22050 Hz mono PCM, so the game ships no asset files.

use std::f32::consts::TAU;

use log::warn;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

pub const SAMPLE_RATE: u32 = 22_050;
const MUSIC_VOLUME: f32 = 0.3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sfx {
    Eat,
    GameOver,
    MenuClick,
}

pub struct Audio {
    // The stream must outlive every sink playing into it
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    music: Option<Sink>,
    eat: Vec<i16>,
    game_over: Vec<i16>,
    menu_click: Vec<i16>,
    muted: bool,
}

impl Audio {
    /// Opens the default output device and starts the music loop. A machine
    /// without an output device gets a silent game instead of an error.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => {
                let music = match Sink::try_new(&handle) {
                    Ok(sink) => {
                        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, music_loop()).repeat_infinite());
                        sink.set_volume(MUSIC_VOLUME);
                        Some(sink)
                    }
                    Err(e) => {
                        warn!("background music unavailable: {e}");
                        None
                    }
                };
                Self {
                    _stream: Some(stream),
                    handle: Some(handle),
                    music,
                    eat: eat_chime(),
                    game_over: game_over_sweep(),
                    menu_click: menu_blip(),
                    muted: false,
                }
            }
            Err(e) => {
                warn!("no audio output device, running silent: {e}");
                Self::disabled()
            }
        }
    }

    /// Silent variant with the same synthesized buffers. Used when no output
    /// device exists and by tests.
    pub fn disabled() -> Self {
        Self {
            _stream: None,
            handle: None,
            music: None,
            eat: eat_chime(),
            game_over: game_over_sweep(),
            menu_click: menu_blip(),
            muted: false,
        }
    }

    pub fn play(&self, sfx: Sfx) {
        if let Some(handle) = &self.handle {
            let data = match sfx {
                Sfx::Eat => self.eat.clone(),
                Sfx::GameOver => self.game_over.clone(),
                Sfx::MenuClick => self.menu_click.clone(),
            };
            let source = SamplesBuffer::new(1, SAMPLE_RATE, data);
            if let Err(e) = handle.play_raw(source.convert_samples()) {
                warn!("sound playback failed: {e}");
            }
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Mutes or unmutes the music loop. Sound effects stay audible.
    pub fn toggle_music(&mut self) {
        self.muted = !self.muted;
        if let Some(music) = &self.music {
            music.set_volume(if self.muted { 0.0 } else { MUSIC_VOLUME });
        }
    }
}

fn to_i16(samples: impl Iterator<Item = f32>) -> Vec<i16> {
    samples.map(|s| (s * i16::MAX as f32) as i16).collect()
}

fn tone(freq: f32, seconds: f32, decay: f32) -> Vec<i16> {
    let frames = (seconds * SAMPLE_RATE as f32) as usize;
    to_i16((0..frames).map(|i| {
        let t = i as f32 / SAMPLE_RATE as f32;
        (TAU * freq * t).sin() * (-t * decay).exp()
    }))
}

// Bright 800 Hz ping with a fast decay
fn eat_chime() -> Vec<i16> {
    tone(800.0, 0.1, 10.0)
}

// Short 1200 Hz click for menu actions
fn menu_blip() -> Vec<i16> {
    tone(1200.0, 0.05, 20.0)
}

// Descending 400 -> 100 Hz sweep. The phase accumulates sample by sample so
// the pitch falls smoothly over the whole half second.
fn game_over_sweep() -> Vec<i16> {
    let seconds = 0.5;
    let frames = (seconds * SAMPLE_RATE as f32) as usize;
    let mut phase = 0.0f32;
    let mut out = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f32 / SAMPLE_RATE as f32;
        let freq = 400.0 - 300.0 * t / seconds;
        phase += TAU * freq / SAMPLE_RATE as f32;
        out.push(phase.sin() * (-t * 2.0).exp());
    }
    to_i16(out.into_iter())
}

// Eight-second arcade loop: a one-note-per-second arpeggio (A3 C4 E4 G4 A4
// G4 E4 C4) over an A2 drone and an E4 harmony, shaped by a slow tremolo and
// normalized to a moderate peak. Every component is periodic at 8 s, so the
// loop point is seamless.
fn music_loop() -> Vec<i16> {
    const NOTES: [f32; 8] = [220.0, 261.63, 329.63, 392.0, 440.0, 392.0, 329.63, 261.63];
    let frames = 8 * SAMPLE_RATE as usize;
    let mut mix = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f32 / SAMPLE_RATE as f32;
        let note = (t as usize).min(NOTES.len() - 1);
        let melody = (TAU * NOTES[note] * t).sin() * (-(t - note as f32) * 2.0).exp();
        let bass = 0.3 * (TAU * 110.0 * t).sin();
        let harmony = 0.2 * (TAU * 330.0 * t).sin();
        let tremolo = 0.8 + 0.2 * (TAU * 0.5 * t).sin();
        mix.push((0.4 * melody + bass + harmony) * tremolo);
    }
    let peak = mix.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    to_i16(mix.into_iter().map(move |s| s / peak * 0.3))
}
