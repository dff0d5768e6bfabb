mod stress_records;
