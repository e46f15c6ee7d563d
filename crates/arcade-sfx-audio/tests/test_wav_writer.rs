//! WAV writer integration tests, read back with an independent decoder.

use std::fs;

use arcade_sfx_audio::{encode_wav, synthesize_seeded, write_wav, AudioError, PcmBuffer};
use arcade_sfx_spec::Preset;
use pretty_assertions::assert_eq;

fn read_back(path: &std::path::Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).expect("readable WAV");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("valid samples");
    (spec, samples)
}

#[test]
fn test_written_mono_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shoot.wav");
    let pcm = synthesize_seeded(&Preset::Shoot.descriptor(), 42).unwrap();

    write_wav(&pcm, &path).unwrap();

    let (spec, samples) = read_back(&path);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples, pcm.samples());
}

#[test]
fn test_written_stereo_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_start.wav");
    let pcm = synthesize_seeded(&Preset::GameStart.descriptor(), 42).unwrap();

    write_wav(&pcm, &path).unwrap();

    let (spec, samples) = read_back(&path);
    assert_eq!(spec.channels, 2);
    assert_eq!(samples.len(), 88200);
    assert_eq!(fs::metadata(&path).unwrap().len(), 44 + 88200 * 2);
}

#[test]
fn test_file_bytes_match_in_memory_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explosion.wav");
    let pcm = synthesize_seeded(&Preset::Explosion.descriptor(), 9).unwrap();

    write_wav(&pcm, &path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), encode_wav(&pcm));
}

#[test]
fn test_existing_file_replaced_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sound.wav");
    fs::write(&path, vec![0xAB; 200_000]).unwrap();

    let pcm = PcmBuffer::from_mono(&[0.25; 10], 1, 8000);
    write_wav(&pcm, &path).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 44 + 20);
    // No temp files left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_directory_is_encoding_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("sound.wav");
    let pcm = PcmBuffer::from_mono(&[0.0; 4], 1, 8000);

    let err = write_wav(&pcm, &path).unwrap_err();
    assert!(matches!(err, AudioError::EncodingFailure { .. }));
    assert!(!err.is_descriptor_error());
    assert_eq!(err.code(), "SFX_010");
    assert!(!path.parent().unwrap().exists());
}

#[test]
fn test_identical_buffers_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    let pcm = synthesize_seeded(&Preset::EnemyDeath.descriptor(), 3).unwrap();

    write_wav(&pcm, &a).unwrap();
    write_wav(&pcm, &b).unwrap();
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_empty_buffer_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");
    let desc = arcade_sfx_spec::SoundDescriptor::builder(0.00001)
        .component(arcade_sfx_spec::Component::white_noise(1.0))
        .build();
    let pcm = synthesize_seeded(&desc, 1).unwrap();

    write_wav(&pcm, &path).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 44);
    let (spec, samples) = read_back(&path);
    assert_eq!(spec.channels, 1);
    assert!(samples.is_empty());
}
