quantity!(KilometersPerHour, suffix: "km/h", precision: 0);
