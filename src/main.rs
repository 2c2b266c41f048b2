fn main() {
    if let Err(e) = chess_opponent::protocol::run_stdio() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
