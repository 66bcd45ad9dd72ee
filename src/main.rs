fn main() {
    rowscript::term::main();
}
