#![allow(non_snake_case)]

use lupmat::{algebra::*, io::ConfigurablePrintTarget, regression::*};

fn test_print_model() -> (LinearRegression<f64>, Matrix<f64>, Matrix<f64>) {
    let X = Matrix::from(&[[0.], [1.], [2.]]);
    let y = Matrix::from(&[[1.], [3.], [5.]]);
    let settings = LinearRegressionSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    (LinearRegression::new(settings), X, y)
}

#[test]
fn test_print_to_stdout() {
    let (mut model, X, y) = test_print_model();
    model.print_to_stdout();
    model.train(&X, &y).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let (mut model, X, y) = test_print_model();
    model.print_to_buffer();
    model.train(&X, &y).unwrap();
    let result = model.get_print_buffer().unwrap();
    assert!(result.contains("lupmat"));
    assert!(result.contains("intercept  = 1"));
    assert!(result.contains("feature 0  = 2"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let (mut model, X, y) = test_print_model();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    model.print_to_file(file.into_file());
    model.train(&X, &y).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("lupmat"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let (mut model, X, y) = test_print_model();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    model.print_to_stream(stream);
    model.train(&X, &y).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("lupmat"));
}

#[test]
fn test_print_to_sink() {
    let (mut model, X, y) = test_print_model();
    model.print_to_sink();
    model.train(&X, &y).unwrap();
    // no output
    assert!(model.get_print_buffer().is_err());
}
