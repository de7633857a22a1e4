use reeltag::naming::{TrackName, expand_paths, is_audio_file};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_artist_and_title() {
    let name = TrackName::from_filename("Boards of Canada - Roygbiv.mp3");
    assert_eq!(name.artist, "Boards of Canada");
    assert_eq!(name.title, "Roygbiv");
    assert!(name.has_artist());
}

#[test]
fn test_title_keeps_later_separators() {
    let name = TrackName::from_filename("Artist - Song - Live Version.flac");
    assert_eq!(name.artist, "Artist");
    assert_eq!(name.title, "Song - Live Version");
}

#[test]
fn test_separator_parts_are_trimmed() {
    let name = TrackName::from_filename("  Artist  -  Title .wav");
    assert_eq!(name.artist, "Artist");
    assert_eq!(name.title, "Title");
}

#[test]
fn test_no_separator() {
    let name = TrackName::from_filename("untitled.track.ogg");
    assert_eq!(name.artist, "");
    assert_eq!(name.title, "untitled.track");
    assert!(!name.has_artist());
}

#[test]
fn test_no_extension() {
    assert_eq!(TrackName::from_filename("demo").title, "demo");
    assert_eq!(TrackName::from_filename("demo.").title, "demo.");
}

#[test]
fn test_hyphen_without_spaces_is_not_a_separator() {
    let name = TrackName::from_filename("Jay-Z.mp3");
    assert_eq!(name.artist, "");
    assert_eq!(name.title, "Jay-Z");
}

#[test]
fn test_is_audio_file() {
    assert!(is_audio_file(Path::new("a/b/song.mp3")));
    assert!(is_audio_file(Path::new("SONG.WAV")));
    assert!(is_audio_file(Path::new("x.M4a")));
    assert!(!is_audio_file(Path::new("cover.jpg")));
    assert!(!is_audio_file(Path::new("mp3")));
}

#[test]
fn test_expand_paths_one_level_of_audio_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("b.mp3"), b"x").unwrap();
    fs::write(root.join("A.WAV"), b"x").unwrap();
    fs::write(root.join("notes.txt"), b"x").unwrap();
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("deep.mp3"), b"x").unwrap();
    fs::create_dir(root.join("folder.flac")).unwrap();

    let explicit = root.join("nested").join("raw.bin");
    fs::write(&explicit, b"x").unwrap();

    let files = expand_paths(&[root.to_path_buf(), explicit.clone()]).unwrap();
    assert_eq!(
        files,
        vec![root.join("A.WAV"), root.join("b.mp3"), explicit]
    );
}

#[test]
fn test_expand_paths_keeps_missing_file_arguments() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.mp3");
    assert_eq!(expand_paths(&[missing.clone()]).unwrap(), vec![missing]);
}

#[test]
fn test_expand_paths_empty_directory() {
    let dir = tempdir().unwrap();
    assert!(expand_paths(&[dir.path().to_path_buf()]).unwrap().is_empty());
}
