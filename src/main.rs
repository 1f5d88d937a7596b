/*
 * alertlabel-api
 *
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use alertlabel_api::Config;
use alertlabel_api::cli::Args;
use clap::Parser;
use color_eyre::eyre::WrapErr;

fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	// A missing `.env` is fine; everything can also come from the real environment.
	let _ = dotenvy::dotenv();

	let mut args = Args::parse();

	if let Some(env_file) = args.env_file.clone() {
		dotenvy::from_path(&env_file)
			.wrap_err_with(|| format!("failed to load `{}`", env_file.display()))?;

		// variables from the file only become visible to clap after a second pass
		args = Args::parse();
	}

	let mut config = Config::load(args.config_path.as_deref())?;
	args.apply_to_config(&mut config);

	alertlabel_api::run(config).wrap_err("failed to run server")
}
