/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Data-quality inspection for the static input tables

use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};

use tm_loaders::{
  DataLoader, LexiconLoader, LexiconLoaderInput, LoaderConfig, LoaderContext, LookupLoader,
  LookupLoaderInput,
};

#[derive(Args, Debug)]
pub struct InspectCommand {
  #[command(subcommand)]
  command: InspectSubcommands,
}

#[derive(Subcommand, Debug)]
enum InspectSubcommands {
  /// Row counts and duplicate keys in the ticker lookup table
  Lookup,

  /// Row counts and skipped categories in the polarity lexicon
  Lexicon,
}

pub fn execute(cmd: InspectCommand, config: Config) -> Result<()> {
  let context = LoaderContext::new(LoaderConfig::default());

  match cmd.command {
    InspectSubcommands::Lookup => {
      let output = LookupLoader::new()
        .load(&context, LookupLoaderInput { file_path: config.core.tickers_csv_path.clone() })?;
      println!("Ticker lookup table: {}", config.core.tickers_csv_path);
      println!("  rows:           {}", output.total_rows);
      println!("  entries:        {}", output.loaded_count);
      println!("  duplicate keys: {}", output.duplicate_count);
    }
    InspectSubcommands::Lexicon => {
      let output = LexiconLoader::new()
        .load(&context, LexiconLoaderInput { file_path: config.core.lexicon_csv_path.clone() })?;
      println!("Polarity lexicon: {}", config.core.lexicon_csv_path);
      println!("  rows:            {}", output.total_rows);
      println!("  scoring entries: {}", output.loaded_count);
      println!("  skipped:         {}", output.skipped_count);
    }
  }

  Ok(())
}
