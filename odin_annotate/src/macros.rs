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

/* #region define_cli  ****************************************************************************************/

/// syntactic sugar macro for clap based command line interface definition
/// ```ignore
/// define_cli! { pub CliArgs [about="my silly prog"] =
///   verbose: bool        [help="run verbose", short],
///   config: String       [help="pathname of config", long, default_value="blah"]
/// }
///
/// fn main () {
///    let args = CliArgs::parse();
///    ...
///    let config = &args.config;
///    ...
/// }
/// ```
/// expands into:
/// ```ignore
/// #[derive(clap::Parser,Debug,Clone)]
/// #[command(about = "my silly prog")]
/// pub struct CliArgs {
///     #[arg(help = "run verbose", short)]
///     pub verbose: bool,
///
///     #[arg(help = "pathname of config", long, default_value = "blah")]
///     pub config: String,
/// }
/// ```
/// Note that we do not create a global (lazy_static) instance here - the parsed args are supposed
/// to be turned into an explicit, immutable request value that is passed around
#[macro_export]
macro_rules! define_cli {
    ($vis:vis $name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )? $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        #[derive(clap::Parser,Debug,Clone)]
        #[command( $( $sopt $(=$sx)? ),* )]
        $vis struct $name {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])?
                pub $fname : $ftype,
            )*
        }
    }
}
pub use define_cli;

/// syntactic sugar macro to define thiserror Error enums:
/// ```ignore
/// define_error!{ pub AnnotateError =
///   IOError( #[from] std::io::Error ) : "IO error: {0}",
///   FontParseFailed(String, #[source] ab_glyph::InvalidFont) : "failed to parse font {0}: {1}"
/// }
/// ```
/// will get expanded into
/// ```ignore
/// #[derive(thiserror::Error,Debug)]
/// pub enum AnnotateError {
///     #[error("IO error: {0}")]
///     IOError(#[from] std::io::Error),
///
///     #[error("failed to parse font {0}: {1}")]
///     FontParseFailed(String, #[source] ab_glyph::InvalidFont),
/// }
/// ```
#[macro_export]
macro_rules! define_error {
    ($vis:vis $name:ident = $( $err_variant:ident ( $( $( #[$meta:meta] )? $field_type:ty),* ) : $msg_lit:literal ),*) => {
        #[derive(thiserror::Error,Debug)]
        $vis enum $name {
            $(
                #[error($msg_lit)]
                $err_variant ( $( $(#[$meta])? $field_type ),*  )
            ),*
        }
    }
}
pub use define_error;

/* #endregion define_cli */
