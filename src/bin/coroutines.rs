fn main() {
    thread_elapsed::logger::init();
    thread_elapsed::coroutines::run();
}
