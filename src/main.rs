fn main() {
    askllm_installer::run_cli();
}
