//! Integration tests for the tilematch binaries.
//!
//! Tests full protocol sessions by spawning the game process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tilematch::board::{deal, Setup};

/// Sends a sequence of commands to the game and collects stdout lines.
fn run_game(args: &[&str], commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_tilematch");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start tilematch");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Splits the output into rendered boards (rows only).
fn boards(lines: &[String]) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if let Some(dims) = lines[i].strip_prefix("board ") {
            let rows: usize = dims.split('x').next().unwrap().parse().unwrap();
            out.push(lines[i + 1..i + 1 + rows].to_vec());
            i += rows + 1;
        } else {
            i += 1;
        }
    }
    out
}

/// Glyph shown at `(row, col)` of a rendered board.
fn glyph(board: &[String], row: usize, col: usize) -> char {
    board[row].chars().nth(col * 3 + 1).unwrap()
}

#[test]
fn startup_prints_initial_board() {
    let lines = run_game(&["--seed", "3"], &["quit"]);
    let all = boards(&lines);
    assert_eq!(all.len(), 1);
    let board = &all[0];
    assert_eq!(board.len(), 4);
    assert!(board.iter().all(|row| row.len() == 24));

    let letters: usize = board
        .iter()
        .map(|row| row.chars().filter(|c| c.is_ascii_uppercase()).count())
        .sum();
    assert_eq!(letters, 21);
}

#[test]
fn board_matches_library_deal() {
    let lines = run_game(&["--seed", "8"], &["quit"]);
    let board = &boards(&lines)[0];
    let expected = deal(&Setup::default(), &mut SmallRng::seed_from_u64(8)).unwrap();
    for piece in expected.pieces() {
        let g = glyph(board, piece.cell.row, piece.cell.col);
        assert_eq!(g, (b'A' + piece.image as u8) as char);
    }
}

#[test]
fn same_seed_same_session() {
    let script = ["board", "shuffle", "board", "quit"];
    assert_eq!(run_game(&["--seed", "21"], &script), run_game(&["--seed", "21"], &script));
}

#[test]
fn seed_command_reproduces_deal() {
    let lines = run_game(&[], &["seed 99", "quit"]);
    let again = run_game(&["--seed", "1"], &["seed 99", "quit"]);
    assert_eq!(boards(&lines)[1], boards(&again)[1]);
}

#[test]
fn click_selects_piece_under_pointer() {
    let lines = run_game(&["--seed", "5"], &["quit"]);
    let board = &boards(&lines)[0];

    let (row, col) = (0..4)
        .flat_map(|r| (0..8).map(move |c| (r, c)))
        .find(|&(r, c)| glyph(board, r, c) != '.')
        .unwrap();
    let x = col * 130 + 65;
    let y = row * 130 + 65;

    let lines = run_game(&["--seed", "5"], &[&format!("click {} {}", x, y), "quit"]);
    assert!(lines.contains(&format!("selected {} {}", row, col)));
    let after = &boards(&lines)[1];
    assert!(after[row].contains('['));
}

#[test]
fn click_on_empty_cell_selects_nothing() {
    let lines = run_game(&["--seed", "5"], &["quit"]);
    let board = &boards(&lines)[0];
    let (row, col) = (0..4)
        .flat_map(|r| (0..8).map(move |c| (r, c)))
        .find(|&(r, c)| glyph(board, r, c) == '.')
        .unwrap();

    let click = format!("click {} {}", col * 130 + 1, row * 130 + 1);
    let lines = run_game(&["--seed", "5"], &[&click, "quit"]);
    assert!(lines.contains(&"selected none".to_string()));
}

#[test]
fn keys_without_selection_move_nothing() {
    let lines = run_game(&["--seed", "4"], &["key left", "key up", "quit"]);
    assert!(!lines.iter().any(|l| l.starts_with("moved")));
    let all = boards(&lines);
    assert_eq!(all[0], all[1]);
    assert_eq!(all[1], all[2]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_game(&["--seed", "2"], &["foobar", "", "click x y", "key space", "quit"]);
    assert_eq!(boards(&lines).len(), 1);
}

#[test]
fn close_key_acknowledged() {
    let lines = run_game(&["--seed", "2"], &["key Escape", "quit"]);
    assert!(lines.contains(&"closed".to_string()));
}

#[test]
fn config_file_changes_board_shape() {
    let path = std::env::temp_dir().join(format!("tilematch-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"rows": 3, "cols": 5, "image_count": 4, "tile_size": 50}"#).unwrap();

    let lines = run_game(&["--seed", "6", "--config", path.to_str().unwrap()], &["quit"]);
    std::fs::remove_file(&path).ok();

    assert_eq!(lines[0], "board 3x5");
    let board = &boards(&lines)[0];
    assert_eq!(board.len(), 3);
    assert!(board.iter().all(|row| row.len() == 15));
}

#[test]
fn catalog_flags_replace_images_and_quotes() {
    let dir = std::env::temp_dir();
    let images = dir.join(format!("tilematch-images-{}.json", std::process::id()));
    let quotes = dir.join(format!("tilematch-quotes-{}.json", std::process::id()));
    std::fs::write(&images, r#"["a", "b", "c", "d", "e", "f", "g"]"#).unwrap();
    std::fs::write(&quotes, r#"[{"text": "Nicely done.", "author": "Tester"}]"#).unwrap();

    let lines = run_game(
        &[
            "--seed",
            "8",
            "--images",
            images.to_str().unwrap(),
            "--quotes",
            quotes.to_str().unwrap(),
        ],
        &["quit"],
    );
    std::fs::remove_file(&images).ok();
    std::fs::remove_file(&quotes).ok();

    let board = &boards(&lines)[0];
    let expected = deal(&Setup::default(), &mut SmallRng::seed_from_u64(8)).unwrap();
    for piece in expected.pieces() {
        let g = glyph(board, piece.cell.row, piece.cell.col);
        assert_eq!(g, (b'A' + piece.image as u8) as char);
    }
}

#[test]
fn too_small_image_catalog_is_refused() {
    let path = std::env::temp_dir().join(format!("tilematch-few-{}.json", std::process::id()));
    std::fs::write(&path, r#"["a", "b"]"#).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_tilematch"))
        .args(["--images", path.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run tilematch");
    std::fs::remove_file(&path).ok();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn oversized_tiles_are_refused_at_startup() {
    let path = std::env::temp_dir().join(format!("tilematch-tiles-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"tile_size": 1000000000}"#).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_tilematch"))
        .args(["--config", path.to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run tilematch");
    std::fs::remove_file(&path).ok();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SurfaceTooLarge"));
}

#[test]
fn autoplay_writes_one_record_per_game() {
    let exe = env!("CARGO_BIN_EXE_autoplay");
    let output = Command::new(exe)
        .args(["--games", "3", "--seed", "4", "--threads", "2", "--max-moves", "200", "--quiet"])
        .output()
        .expect("failed to run autoplay");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r["game_id"], i);
        assert_eq!(r["total_pieces"], 21);
    }
}
