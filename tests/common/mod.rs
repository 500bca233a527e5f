//! Harness de pruebas: el router real sobre repositorios en memoria
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use taller_api::models::{
    Admin, FieldValue, Mechanic, MechanicData, NewReport, NewVehicle, Report, ReportUpdate,
    Vehicle, VehicleUpdate,
};
use taller_api::repositories::{
    AdminRepository, MechanicRepository, ReportRepository, VehicleRepository,
};
use taller_api::{create_router, AppState};

fn storage_down() -> sqlx::Error {
    sqlx::Error::Protocol("conexión con MySQL perdida".into())
}

fn column_cannot_be_null(column: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!("Column '{}' cannot be null", column))
}

fn parse_date(value: &str) -> Result<NaiveDate, sqlx::Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| sqlx::Error::Protocol(format!("Incorrect date value: '{}'", value)))
}

/// `WHERE id = ?` con el id de la ruta: un texto que no es número no coincide
fn row_id(id: &str) -> Option<i64> {
    id.trim().parse().ok()
}

/// Lo que MySQL guarda al escribir un valor en una columna de texto
fn text_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(b) => String::from(if *b { "1" } else { "0" }),
        other => other.to_string(),
    }
}

fn text_column(value: &Option<FieldValue>, column: &str) -> Result<String, sqlx::Error> {
    value.as_ref().map(text_value).ok_or_else(|| column_cannot_be_null(column))
}

fn date_column(value: &FieldValue) -> Result<NaiveDate, sqlx::Error> {
    parse_date(&text_value(value))
}

fn int_column(value: &FieldValue) -> Result<i32, sqlx::Error> {
    let incorrect = || sqlx::Error::Protocol(format!("Incorrect integer value: '{}'", value));
    match value {
        FieldValue::Bool(b) => Ok(i32::from(*b)),
        FieldValue::Integer(n) => i32::try_from(*n).map_err(|_| incorrect()),
        FieldValue::Text(text) => text.trim().parse().map_err(|_| incorrect()),
        FieldValue::Float(_) | FieldValue::Json(_) => Err(incorrect()),
    }
}

/// Interruptor para simular una caída del almacenamiento
#[derive(Default)]
pub struct Outage(AtomicBool);

impl Outage {
    pub fn start(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.0.load(Ordering::SeqCst) {
            Err(storage_down())
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct InMemoryReports {
    pub rows: Mutex<Vec<Report>>,
    pub outage: Outage,
}

impl InMemoryReports {
    pub fn snapshot(&self) -> Vec<Report> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReports {
    async fn find_all(&self) -> Result<Vec<Report>, sqlx::Error> {
        self.outage.check()?;
        Ok(self.snapshot())
    }

    async fn create(&self, report: &NewReport) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let fecha_ingreso = parse_date(&report.fecha_ingreso)?;
        let fecha_salida = report.fecha_salida.as_deref().map(parse_date).transpose()?;

        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        rows.push(Report {
            id,
            matricula: report.matricula.clone(),
            encargado: report.encargado.clone(),
            fecha_ingreso,
            fecha_salida,
            problema: report.problema.clone(),
            reparaciones: report.reparaciones.clone(),
        });
        Ok(id as u64)
    }

    async fn update(&self, id: &str, changes: &ReportUpdate) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| Some(r.id) == row_id(id)) else {
            return Ok(0);
        };

        let matricula = text_column(&changes.matricula, "matricula")?;
        let encargado = text_column(&changes.encargado, "encargado")?;
        let problema = text_column(&changes.problema, "problema")?;
        let fecha_ingreso = changes
            .fecha_ingreso
            .as_ref()
            .ok_or_else(|| column_cannot_be_null("fechaIngreso"))
            .and_then(date_column)?;
        let fecha_salida = changes.fecha_salida.as_ref().map(date_column).transpose()?;

        *row = Report {
            id: row.id,
            matricula,
            encargado,
            fecha_ingreso,
            fecha_salida,
            problema,
            reparaciones: changes.reparaciones.as_ref().map(text_value),
        };
        Ok(1)
    }
}

#[derive(Default)]
pub struct InMemoryMechanics {
    pub rows: Mutex<Vec<Mechanic>>,
    pub outage: Outage,
}

impl InMemoryMechanics {
    pub fn snapshot(&self) -> Vec<Mechanic> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MechanicRepository for InMemoryMechanics {
    async fn find_all(&self) -> Result<Vec<Mechanic>, sqlx::Error> {
        self.outage.check()?;
        Ok(self.snapshot())
    }

    async fn create(&self, mechanic: &MechanicData) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        rows.push(Mechanic {
            id,
            nombre: mechanic.nombre.clone(),
            email: mechanic.email.clone(),
            password: mechanic.password.clone(),
        });
        Ok(id as u64)
    }

    async fn update(&self, id: &str, mechanic: &MechanicData) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let mut affected = 0;
        for row in rows.iter_mut().filter(|m| Some(m.id) == row_id(id)) {
            row.nombre = mechanic.nombre.clone();
            row.email = mechanic.email.clone();
            row.password = mechanic.password.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| Some(m.id) != row_id(id));
        Ok((before - rows.len()) as u64)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Mechanic>, sqlx::Error> {
        self.outage.check()?;
        Ok(self.snapshot().into_iter().find(|m| m.email == email))
    }
}

#[derive(Default)]
pub struct InMemoryVehicles {
    pub rows: Mutex<Vec<Vehicle>>,
    pub outage: Outage,
}

impl InMemoryVehicles {
    pub fn snapshot(&self) -> Vec<Vehicle> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicles {
    async fn find_all(&self) -> Result<Vec<Vehicle>, sqlx::Error> {
        self.outage.check()?;
        Ok(self.snapshot())
    }

    async fn create(&self, vehicle: &NewVehicle) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        rows.push(Vehicle {
            id,
            marca: vehicle.marca.clone(),
            modelo: vehicle.modelo.clone(),
            anio: vehicle.anio,
            chofer: vehicle.chofer.clone(),
            placa: vehicle.placa.clone(),
        });
        Ok(id as u64)
    }

    async fn update(&self, id: &str, changes: &VehicleUpdate) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|v| Some(v.id) == row_id(id)) else {
            return Ok(0);
        };

        *row = Vehicle {
            id: row.id,
            marca: text_column(&changes.marca, "marca")?,
            modelo: text_column(&changes.modelo, "modelo")?,
            anio: changes
                .anio
                .as_ref()
                .ok_or_else(|| column_cannot_be_null("anio"))
                .and_then(int_column)?,
            chofer: text_column(&changes.chofer, "chofer")?,
            placa: text_column(&changes.placa, "placa")?,
        };
        Ok(1)
    }

    async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        self.outage.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|v| Some(v.id) != row_id(id));
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryAdmins {
    pub rows: Mutex<Vec<Admin>>,
    pub outage: Outage,
}

#[async_trait]
impl AdminRepository for InMemoryAdmins {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        self.outage.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.email == email).cloned())
    }
}

/// Respuesta ya leída
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text)
            .unwrap_or_else(|e| panic!("respuesta no es JSON ({}): {}", e, self.text))
    }
}

pub struct TestApp {
    pub router: Router,
    pub reports: Arc<InMemoryReports>,
    pub mechanics: Arc<InMemoryMechanics>,
    pub vehicles: Arc<InMemoryVehicles>,
    pub admins: Arc<InMemoryAdmins>,
}

impl TestApp {
    pub fn new() -> Self {
        let reports = Arc::new(InMemoryReports::default());
        let mechanics = Arc::new(InMemoryMechanics::default());
        let vehicles = Arc::new(InMemoryVehicles::default());
        let admins = Arc::new(InMemoryAdmins::default());

        let state = AppState::new(
            reports.clone(),
            mechanics.clone(),
            vehicles.clone(),
            admins.clone(),
        );

        Self {
            router: create_router(state),
            reports,
            mechanics,
            vehicles,
            admins,
        }
    }

    pub fn with_admin(self, id: i64, email: &str, password: &str) -> Self {
        self.admins.rows.lock().unwrap().push(Admin {
            id,
            email: email.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.call(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.call(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.call(Method::DELETE, uri, None).await
    }
}
