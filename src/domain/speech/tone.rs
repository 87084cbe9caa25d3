use std::f64::consts::PI;

pub const WAV_HEADER_LEN: usize = 44;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u32 = (BITS_PER_SAMPLE / 8) as u32;
const PCM_FORMAT: u16 = 1;

/// A pure sine tone rendered as mono 16-bit PCM
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub duration_ms: u32,
    pub sample_rate: u32,
    pub frequency: f64,
}

impl Tone {
    /// Audio returned when the provider cannot produce speech
    pub const PLACEHOLDER: Tone = Tone {
        duration_ms: 800,
        sample_rate: 16_000,
        frequency: 440.0,
    };

    pub fn sample_count(&self) -> usize {
        (u64::from(self.duration_ms) * u64::from(self.sample_rate) / 1000) as usize
    }

    /// Samples quantized by flooring into the signed 16-bit range
    pub fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        (0..self.sample_count()).map(move |i| {
            let phase = (2.0 * PI * self.frequency * i as f64) / f64::from(self.sample_rate);
            (32767.0 * phase.sin()).floor() as i16
        })
    }

    /// Render as a canonical 44-byte-header WAV file
    pub fn to_wav(&self) -> Vec<u8> {
        let data_len = self.sample_count() as u32 * BYTES_PER_SAMPLE;
        let byte_rate = self.sample_rate * u32::from(CHANNELS) * BYTES_PER_SAMPLE;
        let block_align = CHANNELS * BITS_PER_SAMPLE / 8;

        let mut wav = Vec::with_capacity(WAV_HEADER_LEN + data_len as usize);

        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&PCM_FORMAT.to_le_bytes());
        wav.extend_from_slice(&CHANNELS.to_le_bytes());
        wav.extend_from_slice(&self.sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());

        for sample in self.samples() {
            wav.extend_from_slice(&sample.to_le_bytes());
        }

        wav
    }
}
