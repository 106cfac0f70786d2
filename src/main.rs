fn main() {
    learnsphere::app::cli::run();
}
