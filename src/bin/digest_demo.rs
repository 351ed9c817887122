fn main() {
    msgdigest::report::print_message_digest(
        "sha256",
        &["Test", "Message", "Hello", "World"],
    );
}
