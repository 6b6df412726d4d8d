fn main() {
    thread_elapsed::logger::init();
    thread_elapsed::sequential::run();
}
