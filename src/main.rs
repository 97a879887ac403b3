use fuelfit::{run_pipeline, RawRecord, TrainConfig};

/// A small slice of the upstream cars dataset, in its original JSON shape.
/// Records with a null field are dropped during cleaning.
const CARS_SAMPLE: &str = r#"[
    {"Name": "chevrolet chevelle malibu", "Miles_per_Gallon": 18, "Horsepower": 130},
    {"Name": "buick skylark 320", "Miles_per_Gallon": 15, "Horsepower": 165},
    {"Name": "plymouth satellite", "Miles_per_Gallon": 18, "Horsepower": 150},
    {"Name": "amc rebel sst", "Miles_per_Gallon": 16, "Horsepower": 150},
    {"Name": "ford torino", "Miles_per_Gallon": 17, "Horsepower": 140},
    {"Name": "ford galaxie 500", "Miles_per_Gallon": 15, "Horsepower": 198},
    {"Name": "chevrolet impala", "Miles_per_Gallon": 14, "Horsepower": 220},
    {"Name": "plymouth fury iii", "Miles_per_Gallon": 14, "Horsepower": 215},
    {"Name": "pontiac catalina", "Miles_per_Gallon": 14, "Horsepower": 225},
    {"Name": "amc ambassador dpl", "Miles_per_Gallon": 15, "Horsepower": 190},
    {"Name": "citroen ds-21 pallas", "Miles_per_Gallon": null, "Horsepower": 115},
    {"Name": "chevrolet chevelle concours (sw)", "Miles_per_Gallon": null, "Horsepower": 165},
    {"Name": "ford mustang boss 302", "Miles_per_Gallon": null, "Horsepower": 140},
    {"Name": "datsun pl510", "Miles_per_Gallon": 27, "Horsepower": 88},
    {"Name": "volkswagen 1131 deluxe sedan", "Miles_per_Gallon": 26, "Horsepower": 46},
    {"Name": "peugeot 504", "Miles_per_Gallon": 25, "Horsepower": 87},
    {"Name": "audi 100 ls", "Miles_per_Gallon": 24, "Horsepower": 90},
    {"Name": "saab 99e", "Miles_per_Gallon": 25, "Horsepower": 95},
    {"Name": "bmw 2002", "Miles_per_Gallon": 26, "Horsepower": 113},
    {"Name": "amc gremlin", "Miles_per_Gallon": 21, "Horsepower": 90},
    {"Name": "ford f250", "Miles_per_Gallon": 10, "Horsepower": 215},
    {"Name": "chevy c20", "Miles_per_Gallon": 10, "Horsepower": 200},
    {"Name": "dodge d200", "Miles_per_Gallon": 11, "Horsepower": 210},
    {"Name": "hi 1200d", "Miles_per_Gallon": 9, "Horsepower": 193},
    {"Name": "toyota corolla 1200", "Miles_per_Gallon": 31, "Horsepower": 65},
    {"Name": "honda civic", "Miles_per_Gallon": 24, "Horsepower": 97},
    {"Name": "renault 12 (sw)", "Miles_per_Gallon": 26, "Horsepower": 69},
    {"Name": "datsun 510 (sw)", "Miles_per_Gallon": 28, "Horsepower": 92}
]"#;

fn main() {
    env_logger::init();

    let records: Vec<RawRecord> =
        serde_json::from_str(CARS_SAMPLE).expect("embedded dataset is valid JSON");

    match run_pipeline(&records, &TrainConfig::default()) {
        Ok(run) => {
            println!("trained on {} samples ({} epochs)", run.dataset.len(), run.history.len());
            if let Some(last) = run.history.last() {
                println!("final loss {:.6}, mse {:.6}", last.loss, last.metric);
            }
            println!("prediction curve ({} points):", run.curve.len());
            for point in run.curve.iter().step_by(10) {
                println!("  {:7.2} hp -> {:6.2} mpg", point.x, point.y);
            }
        }
        Err(e) => {
            eprintln!("pipeline failed: {e}");
            std::process::exit(1);
        }
    }
}
