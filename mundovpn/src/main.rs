fn main() {
    mundovpn::run_app();
}
