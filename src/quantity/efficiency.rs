quantity!(KilometersPerKilowattHour, suffix: "km/kWh", precision: 1);
