//! The wizard driven through the plain line protocol, as a terminal would.

use std::io::Cursor;

use backstage_config_prompt::LineBackend;
use backstage_config_wizard::wizard;

fn run(input: impl AsRef<[u8]>) -> (backstage_config_types::Config, String) {
    let mut backend = LineBackend::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
    let config = wizard::run(&mut backend).unwrap();
    let transcript = String::from_utf8(backend.into_output()).unwrap();
    (config, transcript)
}

#[test]
fn prompts_show_defaults_and_yes_no_hints() {
    let (config, transcript) = run("\n\n\n9000\n\n\n\nn\n");

    assert!(transcript.starts_with("\nGeneral App Configurations\n"));
    assert!(transcript.contains("Enter application title [TeraSky OSS Backstage]: "));
    assert!(transcript.contains("Enter backend base URL [http://localhost:9000]: "));
    assert!(transcript.contains("Configure GitHub integration? (y/n) [y]: "));
    assert!(transcript.contains("Configure Microsoft authentication? (y/n) [n]: "));
    assert_eq!(config.backend.base_url, "http://localhost:9000");
    assert!(config.integrations.github.is_empty());
}

#[test]
fn proxy_endpoint_from_typed_lines() {
    let input = [
        "", "", "", "", "", // app, organization, backend
        "", "",  // authentication
        "n", // github integration
        "", "", "", "", // graph, kubernetes, ingestor, scaleops
        "y", "y", "/scaleops", "http://scaleops.local", "y", "n",
    ]
    .join("\n")
        + "\n";
    let (config, _) = run(&input);

    let proxy = config.proxy.expect("proxy branch");
    assert_eq!(proxy.endpoints["/scaleops"].target, "http://scaleops.local");
    assert!(proxy.endpoints["/scaleops"].change_origin);
    // Input ran out after the proxy section; everything after is defaulted.
    assert!(config.devpod.is_none());
    assert!(!config.permission.enabled);
}

#[test]
fn end_of_input_does_not_loop_forever() {
    // Accept Kubernetes, then run dry while clusters default to "add".
    let input = ["", "", "", "", "", "", "", "n", "", "y"].join("\n") + "\n";
    let (config, _) = run(&input);

    assert_eq!(config.kubernetes.expect("kubernetes branch").clusters().count(), 0);
}

#[test]
fn windows_line_endings_are_accepted() {
    let (config, _) = run("My Portal\r\n\r\nAcme\r\n");

    assert_eq!(config.app.title, "My Portal");
    assert_eq!(config.organization.name, "Acme");
}

#[test]
fn latin1_answer_does_not_derail_later_loops() {
    let mut input = b"Caf\xe9\n".to_vec();
    let rest = [
        "", "", "", "", "", "", // base URL, organization, backend, authentication
        "n", // github integration
        "",  // graph
        "y", "y", "prod", "https://prod.example.com", "", "", "tok-123", "n",
    ];
    input.extend_from_slice((rest.join("\n") + "\n").as_bytes());
    let (config, _) = run(&input);

    assert_eq!(config.app.title, "Caf\u{fffd}");
    let kubernetes = config.kubernetes.expect("kubernetes branch");
    let names: Vec<&str> = kubernetes.clusters().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["prod"]);
}
