mod utils;

use chrono::{NaiveDateTime, Utc};
use entity::error_reports;
use utils::prelude::*;

fn report_form(titulo: &str) -> Vec<(&'static str, String)> {
    vec![
        ("titulo", titulo.to_owned()),
        ("descripcion", "El servidor responde 502 al enviar el pedido".to_owned()),
        ("tipo_error", "502 Bad Gateway".to_owned()),
        ("url", "https://shop.example.com/checkout".to_owned()),
        ("metodo_http", "POST".to_owned()),
        ("ip_cliente", "203.0.113.7".to_owned()),
    ]
}

async fn submit(app: &App, form: &[(&str, String)]) -> Value {
    let res = app.post("/reporte/").form(form).send().await;

    assert_eq!(res.status(), StatusCode::OK);

    res.json().await
}

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        let before = Utc::now();

        let body = submit(&app, &report_form("Checkout caído")).await;

        assert_json_eq!(
            body,
            json!({
                "status": "ok",
                "message": "Reporte guardado correctamente",
            })
        );

        let stored = error_reports::Entity::find().all(app.db()).await.unwrap();
        assert_eq!(stored.len(), 1);

        let report = &stored[0];
        assert_eq!(report.titulo, "Checkout caído");
        assert_eq!(report.ip_cliente.as_deref(), Some("203.0.113.7"));
        assert!(report.activo);
        assert!(report.fecha_reporte >= before - chrono::Duration::seconds(1));
        assert!(report.fecha_reporte <= Utc::now());
    }

    #[tokio::test]
    async fn blank_ip_is_null() {
        let app = App::new().await;

        let mut form = report_form("Sin IP");
        form.retain(|(key, _)| *key != "ip_cliente");
        form.push(("ip_cliente", "   ".to_owned()));

        let body = submit(&app, &form).await;
        assert_eq!(body["status"], "ok");

        let report = error_reports::Entity::find()
            .one(app.db())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.ip_cliente, None);
    }

    #[tokio::test]
    async fn empty_description() {
        let app = App::new().await;

        let mut form = report_form("Sin descripción");
        form.retain(|(key, _)| *key != "descripcion");
        form.push(("descripcion", String::new()));

        let body = submit(&app, &form).await;

        assert_json_eq!(
            body,
            json!({
                "status": "error",
                "message": {
                    "descripcion": ["Este campo es obligatorio."],
                },
            })
        );

        assert_eq!(
            error_reports::Entity::find().count(app.db()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn url_without_scheme() {
        let app = App::new().await;

        let mut form = report_form("Sin esquema");
        form.retain(|(key, _)| *key != "url");
        form.push(("url", "example.com/checkout".to_owned()));

        let body = submit(&app, &form).await;
        assert_eq!(body["status"], "ok");

        let report = error_reports::Entity::find()
            .one(app.db())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.url, "https://example.com/checkout");
    }

    #[tokio::test]
    async fn stores_compressed_ipv6() {
        let app = App::new().await;

        let mut form = report_form("IPv6");
        form.retain(|(key, _)| *key != "ip_cliente");
        form.push((
            "ip_cliente",
            "0000:0000:0000:0000:0000:ffff:192.168.100.200".to_owned(),
        ));

        let body = submit(&app, &form).await;
        assert_eq!(body["status"], "ok");

        let report = error_reports::Entity::find()
            .one(app.db())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.ip_cliente.as_deref(), Some("::ffff:192.168.100.200"));
    }

    #[tokio::test]
    async fn reports_every_invalid_field() {
        let app = App::new().await;

        let body = submit(
            &app,
            &[
                ("titulo", "t".repeat(151)),
                ("url", "not a url".to_owned()),
                ("ip_cliente", "999.0.0.1".to_owned()),
            ],
        )
        .await;

        assert_eq!(body["status"], "error");

        let message = body["message"].as_object().expect("field errors");
        let mut fields: Vec<&str> = message.keys().map(String::as_str).collect();
        fields.sort_unstable();

        assert_eq!(
            fields,
            [
                "descripcion",
                "ip_cliente",
                "metodo_http",
                "tipo_error",
                "titulo",
                "url"
            ]
        );
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn html_by_default() {
        let app = App::new().await;
        submit(&app, &report_form("<i>Checkout</i>")).await;

        let res = app.get("/errorReports/").send().await;
        let page = assert_html!(res);

        assert!(page.contains("&lt;i&gt;Checkout&lt;/i&gt;"));
        assert!(page.contains("203.0.113.7"));
    }

    #[tokio::test]
    async fn json_format_query() {
        let app = App::new().await;
        submit(&app, &report_form("Primero")).await;
        submit(&app, &report_form("Segundo")).await;

        let res = app.get("/errorReports/?format=json").send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        let reports = body.as_array().expect("json array");
        assert_eq!(reports.len(), 2);

        assert_json_include!(
            actual: body.clone(),
            expected: json!([
                {
                    "titulo": "Primero",
                    "descripcion": "El servidor responde 502 al enviar el pedido",
                    "tipo_error": "502 Bad Gateway",
                    "url": "https://shop.example.com/checkout",
                    "metodo_http": "POST",
                    "ip_cliente": "203.0.113.7",
                    "activo": true,
                },
                {
                    "titulo": "Segundo",
                },
            ])
        );

        for report in reports {
            let fecha = report["fecha_reporte"].as_str().expect("fecha_reporte");
            assert_eq!(fecha.len(), 19, "{fecha}");
            assert!(
                NaiveDateTime::parse_from_str(fecha, "%Y-%m-%d %H:%M:%S").is_ok(),
                "{fecha}"
            );
        }
    }

    #[tokio::test]
    async fn repeated_format_uses_last() {
        let app = App::new().await;
        submit(&app, &report_form("Repetido")).await;

        let res = app.get("/errorReports/?format=html&format=json").send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body[0]["titulo"], "Repetido");

        let res = app.get("/errorReports/?format=json&format=html").send().await;
        let page = assert_html!(res);
        assert!(page.contains("Repetido"));
    }

    #[tokio::test]
    async fn json_for_ajax() {
        let app = App::new().await;

        let mut form = report_form("Sin IP");
        form.retain(|(key, _)| *key != "ip_cliente");
        submit(&app, &form).await;

        let res = app.get("/errorReports/").ajax().send().await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body[0]["ip_cliente"], Value::Null);
        assert_eq!(body[0]["activo"], true);
    }

    #[tokio::test]
    async fn empty() {
        let app = App::new().await;

        let res = app.get("/errorReports/?format=json").send().await;
        let body: Value = res.json().await;

        assert_json_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn renders_form() {
    let app = App::new().await;

    let res = app.get("/reporte/").send().await;
    let page = assert_html!(res);

    for field in [
        "titulo",
        "descripcion",
        "tipo_error",
        "url",
        "metodo_http",
        "ip_cliente",
    ] {
        assert!(page.contains(&format!("name=\"{field}\"")), "{field}");
    }
}
