use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Result, anyhow};

/// Open `url` with the platform's default handler without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
	let mut attempts: Vec<(&str, Vec<&str>)> = Vec::new();
	if cfg!(target_os = "macos") {
		attempts.push(("open", vec![url]));
	} else if cfg!(target_os = "windows") {
		attempts.push(("cmd", vec!["/C", "start", "", url]));
	} else {
		attempts.push(("xdg-open", vec![url]));
		attempts.push(("gio", vec!["open", url]));
	}

	for (program, args) in attempts {
		let spawned = Command::new(program)
			.args(&args)
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn();
		if let Ok(mut child) = spawned {
			thread::spawn(move || child.wait());
			return Ok(());
		}
	}

	Err(anyhow!("no URL opener available for {url}"))
}
