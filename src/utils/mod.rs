mod io;
mod text;

pub use io::is_stdin_tty;
pub use text::split_args;
