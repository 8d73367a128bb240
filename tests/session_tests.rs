use std::fs;

use stack_huffman::shell::{Command, Mode, Reply, Session};
use tempfile::tempdir;

#[test]
fn text_is_compressed_and_decompressed() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let compressed = dir.path().join("compressed.txt");
    let output = dir.path().join("output.txt");
    let text = "A session writes artifacts\nand reads them back.\n";
    fs::write(&input, text).unwrap();

    let mut session = Session::default();
    assert_eq!(session.mode(), Mode::Compress);
    session.execute(Command::Input(input)).unwrap();
    assert!(!session.is_saved());
    session.execute(Command::Output(compressed.clone())).unwrap();
    assert!(session.is_saved());

    session.execute(Command::SetMode(Mode::Decompress)).unwrap();
    assert!(session.codec().is_none());
    session.execute(Command::Input(compressed)).unwrap();
    session.execute(Command::Output(output.clone())).unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), text);
}

#[test]
fn debug_and_level_describe_the_loaded_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "abracadabra").unwrap();

    let mut session = Session::default();
    session.execute(Command::Input(input)).unwrap();

    assert_eq!(
        session.execute(Command::Debug).unwrap(),
        Reply::Output("113 106 56".to_owned())
    );
    assert_eq!(session.execute(Command::Level).unwrap(), Reply::Output("3".to_owned()));
}

#[test]
fn unsaved_file_asks_for_confirmation() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "unsaved").unwrap();

    let mut session = Session::default();
    session.execute(Command::Input(input)).unwrap();
    assert_eq!(session.execute(Command::Exit).unwrap(), Reply::ConfirmExit);

    session
        .execute(Command::Output(dir.path().join("out.txt")))
        .unwrap();
    assert_eq!(session.execute(Command::Exit).unwrap(), Reply::Exit);
}

#[test]
fn failed_load_keeps_the_previous_codec() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "kept").unwrap();

    let mut session = Session::new(Mode::Compress);
    session.execute(Command::Input(input)).unwrap();
    assert!(session
        .execute(Command::Input(dir.path().join("missing.txt")))
        .is_err());

    assert_eq!(session.codec().unwrap().decoded(), "kept");
}

#[test]
fn malformed_artifact_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.txt");
    fs::write(&input, "0101\nnot a number\n").unwrap();

    let mut session = Session::new(Mode::Decompress);
    let error = session.execute(Command::Input(input)).unwrap_err();

    assert!(format!("{error:#}").contains("malformed artifact at line 2"));
}
