use httpmock::{Method::GET, MockServer};
use sidra_rs::metadata::{load_metadata, normalize_html, parse_metadata};
use sidra_rs::{Category, Variable};

fn mock_description<'a>(server: &'a MockServer, code: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/desctabapi.aspx")
            .query_param("c", code);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(crate::common::fixture("desctabapi", code, "html"));
    })
}

#[tokio::test]
async fn offline_metadata_1612_parses_fully() {
    let server = MockServer::start();
    let mock = mock_description(&server, "1612");
    let client = crate::common::client_for(&server);

    let md = load_metadata(&client, 1612).await.unwrap();
    mock.assert();

    assert!(md.active);
    assert_eq!(
        md.title,
        "Area plantada, area colhida, quantidade produzida, rendimento medio e valor da producao das lavouras temporarias"
    );
    assert_eq!(md.research, "Producao Agricola Municipal");
    assert_eq!(md.subject, "Lavouras temporarias");

    assert_eq!(md.dates.len(), 45);
    assert_eq!(md.dates[..3], ["1974", "1975", "1976"]);
    assert_eq!(md.dates[42..], ["2016", "2017", "2018"]);
    assert_eq!(md.last_date(), Some("2018"));

    assert_eq!(md.vars.len(), 8);
    assert_eq!(
        md.vars[0],
        Variable {
            code: 109,
            name: "Area plantada".into(),
            desc: "Area plantada (Hectares) [1988 a 2018]".into(),
            decimals: "casas decimais: padrao = 0, maximo = 0".into(),
        }
    );
    assert_eq!(
        md.vars[7],
        Variable {
            code: 1000215,
            name: "Valor da producao".into(),
            desc: "Valor da producao - percentual do total geral (%)".into(),
            decimals: "casas decimais: padrao = 2, maximo = 5".into(),
        }
    );

    assert_eq!(md.options.len(), 1);
    let products = &md.options[0];
    assert_eq!(products.code, "C81");
    assert_eq!(products.name, "Produto das lavouras temporarias");
    assert_eq!(products.count, 34);
    assert_eq!(products.values.len(), 34);
    assert_eq!(
        products.values[0],
        Category {
            code: 0,
            name: "Total".into()
        }
    );
    assert_eq!(
        products.values[33],
        Category {
            code: 109180,
            name: "Triticale (em grao) [2005 a 2018]".into()
        }
    );
    assert_eq!(
        products.category(40470).map(|c| c.name.as_str()),
        Some("Cana para forragem [1974 a 1987]")
    );

    let expected = [
        ("N1", "Brasil(1)"),
        ("N2", "Grande Regiao(5)"),
        ("N3", "Unidade da Federacao(27)"),
        ("N8", "Mesorregiao Geografica [1990 a 2018](137)"),
        ("N9", "Microrregiao Geografica [1990 a 2018](558)"),
        ("N6", "Municipio(5.563)"),
    ];
    assert_eq!(md.territory.len(), 6);
    assert_eq!(
        md.territory.codes().collect::<Vec<_>>(),
        expected.map(|(code, _)| code)
    );
    for (code, name) in expected {
        assert_eq!(md.territorial_level(code), Some(name), "level {code}");
    }
}

#[test]
fn parsed_metadata_serializes_to_json() {
    let html = crate::common::fixture("desctabapi", "1612", "html");
    let md = parse_metadata(1612, &normalize_html(&html)).unwrap();

    let json = serde_json::to_value(&md).unwrap();
    assert_eq!(json["active"], true);
    assert_eq!(json["vars"][0]["code"], 109);
    assert_eq!(json["options"][0]["values"][0]["name"], "Total");
    assert_eq!(json["territory"]["N6"], "Municipio(5.563)");
}

#[test]
fn wrong_table_code_is_a_parse_error() {
    let html = crate::common::fixture("desctabapi", "1612", "html");
    let err = parse_metadata(1613, &normalize_html(&html)).unwrap_err();
    assert!(
        matches!(err, sidra_rs::SidraError::Parse { state: "initial", .. }),
        "got {err:?}"
    );
}

#[test]
fn truncated_page_is_a_parse_error() {
    let html = crate::common::fixture("desctabapi", "1612", "html");
    let normalized = normalize_html(&html);
    // drop the last variable line
    let truncated = normalized.replacen(
        "1000215 Valor da produção - percentual do total geral (%) - casas decimais: padrão = 2, máximo = 5\n",
        "",
        1,
    );
    assert_ne!(truncated, normalized);

    match parse_metadata(1612, &truncated).unwrap_err() {
        sidra_rs::SidraError::Parse { reason, .. } => {
            assert!(reason.contains("declared 8 variables but parsed 7"), "{reason}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}
