/*!
# `<variable> IS <value>`

## Purpose
Give a reserved variable a new value.

## Remarks
The value is read according to the type the variable was reserved with.
The variable name is looked up in capitals, so reserve variables with
capital names if you intend to assign them. `CHARACTER` variables and
variables of an unknown type can't be assigned.

## Example
```text
1 RESERVE GREETING _ TEXT
2 GREETING IS "Hello there"
3 SHOUT GREETING
4 END
RUN
HELLO THERE!
```

*/
