fn main() {
    std::fs::create_dir_all("src/proto").expect("create src/proto");

    protobuf_codegen::Codegen::new()
        .pure()
        .out_dir("src/proto")
        .inputs(["proto/rendezvous.proto"])
        .include("proto")
        .run_from_script();
}
