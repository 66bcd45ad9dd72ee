/*!
# `RESERVE <name> <anything> <type>`

## Purpose
Create a variable.

## Remarks
The second argument is required but ignored; `_` is customary. The
variable starts out as `0`, empty text, `FALSE`, or type `NONE`
depending on `<type>`. An unknown type reserves a variable that can't
hold anything. Reserving an existing name starts it over.

## Example
```text
1 RESERVE COUNT _ NUMBER
2 RESERVE READY _ CONDITION
3 RESERVE KIND _ TYPE
4 END
```

*/
