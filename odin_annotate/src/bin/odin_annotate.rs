/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::process;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;
use odin_annotate::{cli::{parse_args, usage}, pipeline::{run, Stage}};

fn main ()->Result<()> {
    // use RUST_LOG to set max level
    let _ = tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .try_init();

    let args = match parse_args( std::env::args_os()) {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            // everything that is not -h/--help/--version is a usage error, which always exits with 1
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit()
    };

    let request = match args.to_request_args().validate() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{e}\n");
            eprintln!("{}", usage());
            return Err( anyhow!("{} failed ({})", Stage::ValidateArgs, e.code()) )
        }
    };

    let report = run( &request)?;
    if let Some(e) = &report.render_error {
        eprintln!("Error drawing the message into the image. {e}");
    }
    println!("saved {} ({}x{})", request.dst.display(), report.width, report.height);

    Ok(())
}
