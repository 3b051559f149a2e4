#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const ROUTER: &str = r"import Ember from 'ember';
import config from './config/environment';

const Router = Ember.Router.extend({
  location: config.locationType
});

Router.map(function() {
});

export default Router;
";

pub fn scaffold_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("scaffold"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("SCAFFOLD_LOG");
	cmd
}

/// Write `content` to `app/router.js` under `root`.
pub fn write_router(root: &Path, content: &str) -> std::io::Result<()> {
	std::fs::create_dir_all(root.join("app"))?;
	std::fs::write(root.join("app/router.js"), content)
}

pub fn read_router(root: &Path) -> std::io::Result<String> {
	std::fs::read_to_string(root.join("app/router.js"))
}
