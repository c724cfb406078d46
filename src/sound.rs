//! Procedural sound effects.
//!
//! Each effect is synthesised once with fundsp, then played through a
//! detached rodio sink so the frame loop never waits on audio.

use fundsp::prelude::*;
use rodio::{OutputStream, OutputStreamBuilder, Sink, buffer::SamplesBuffer};

pub const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Short upward chirp on each click.
    Elevate,
    /// Falling sawtooth on game over.
    Crash,
}

impl Effect {
    fn duration(&self) -> f32 {
        match self {
            Effect::Elevate => 0.1,
            Effect::Crash => 0.5,
        }
    }
}

pub struct Sound {
    stream: Option<OutputStream>,
    elevate: Vec<f32>,
    crash: Vec<f32>,
}

impl Sound {
    /// Opens the default output device unless `muted`. A missing device only mutes.
    pub fn new(muted: bool) -> Self {
        let stream = if muted {
            None
        } else {
            match OutputStreamBuilder::open_default_stream() {
                Ok(mut stream) => {
                    stream.log_on_drop(false);
                    Some(stream)
                }
                Err(e) => {
                    log::warn!("audio disabled: {e}");
                    None
                }
            }
        };
        Self {
            stream,
            elevate: synth(Effect::Elevate),
            crash: synth(Effect::Crash),
        }
    }

    pub fn play(&self, effect: Effect) {
        let Some(stream) = &self.stream else {
            return;
        };
        let samples = match effect {
            Effect::Elevate => self.elevate.clone(),
            Effect::Crash => self.crash.clone(),
        };
        let sink = Sink::connect_new(stream.mixer());
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
        sink.detach();
    }
}

/// Render an effect to mono samples.
pub fn synth(effect: Effect) -> Vec<f32> {
    match effect {
        Effect::Elevate => {
            // 600Hz up to 1500Hz over 80ms, fading out by 100ms
            let freq = lfo(|t: f32| 600.0 + 900.0 * (t / 0.08).min(1.0));
            let gain = lfo(|t: f32| 0.12 * (1.0 - t / 0.1).max(0.0));
            render_mono((freq >> sine::<f32>()) * gain, effect.duration())
        }
        Effect::Crash => {
            // 400Hz down to 80Hz over 0.4s, silent by 0.5s
            let freq = lfo(|t: f32| 400.0 - 320.0 * (t / 0.4).min(1.0));
            let gain = lfo(|t: f32| 0.15 * (1.0 - (t / 0.5).min(1.0)));
            render_mono((freq >> saw()) * gain, effect.duration())
        }
    }
}

fn render_mono<X>(mut node: An<X>, seconds: f32) -> Vec<f32>
where
    X: AudioNode<Inputs = U0, Outputs = U1>,
{
    node.set_sample_rate(SAMPLE_RATE as f64);
    let n = (SAMPLE_RATE as f32 * seconds) as usize;
    (0..n).map(|_| node.get_mono()).collect()
}
